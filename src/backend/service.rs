//! Auth and room backend seam, plus an in-process implementation.

use bevy::prelude::*;
use std::collections::HashMap;

use super::error::BackendError;
use super::rooms::RoomSummary;

/// Account and room operations the launcher needs from a backend.
pub trait LauncherBackend: Send + Sync {
    fn sign_in(&mut self, id: &str, password: &str) -> Result<(), BackendError>;

    fn sign_up(&mut self, id: &str, password: &str) -> Result<(), BackendError>;

    fn is_id_available(&self, id: &str) -> bool;

    /// Create a room; the creator becomes its first player.
    fn create_room(&mut self, name: &str) -> Result<(), BackendError>;

    fn join_room(&mut self, name: &str) -> Result<(), BackendError>;

    fn leave_room(&mut self, name: &str);

    /// Room changes since the previous call.
    fn drain_room_updates(&mut self) -> Vec<RoomSummary>;
}

/// Installed backend.
#[derive(Resource)]
pub struct Backend(pub Box<dyn LauncherBackend>);

impl Backend {
    pub fn new(backend: impl LauncherBackend + 'static) -> Self {
        Self(Box::new(backend))
    }
}

/// Backend that keeps accounts and rooms in memory.
#[derive(Debug, Default)]
pub struct LocalBackend {
    accounts: HashMap<String, String>,
    rooms: HashMap<String, RoomSummary>,
    max_players: u32,
    updates: Vec<RoomSummary>,
}

impl LocalBackend {
    pub fn new(max_players: u32) -> Self {
        Self {
            max_players: max_players.max(1),
            ..Default::default()
        }
    }

    pub fn with_account(mut self, id: &str, password: &str) -> Self {
        self.accounts.insert(id.to_string(), password.to_string());
        self
    }

    pub fn room(&self, name: &str) -> Option<&RoomSummary> {
        self.rooms.get(name)
    }

    fn publish(&mut self, room: RoomSummary) {
        self.updates.push(room);
    }
}

fn require(value: &str, field: &'static str) -> Result<(), BackendError> {
    if value.trim().is_empty() {
        Err(BackendError::EmptyField(field))
    } else {
        Ok(())
    }
}

impl LauncherBackend for LocalBackend {
    fn sign_in(&mut self, id: &str, password: &str) -> Result<(), BackendError> {
        require(id, "ID")?;
        require(password, "password")?;
        match self.accounts.get(id) {
            Some(stored) if stored == password => {
                info!("Signed in as '{}'", id);
                Ok(())
            }
            _ => {
                warn!("Sign-in rejected for '{}'", id);
                Err(BackendError::InvalidCredentials)
            }
        }
    }

    fn sign_up(&mut self, id: &str, password: &str) -> Result<(), BackendError> {
        require(id, "ID")?;
        require(password, "password")?;
        if self.accounts.contains_key(id) {
            return Err(BackendError::IdTaken(id.to_string()));
        }
        self.accounts.insert(id.to_string(), password.to_string());
        info!("Signed up '{}'", id);
        Ok(())
    }

    fn is_id_available(&self, id: &str) -> bool {
        !id.trim().is_empty() && !self.accounts.contains_key(id)
    }

    fn create_room(&mut self, name: &str) -> Result<(), BackendError> {
        require(name, "room name")?;
        if self.rooms.contains_key(name) {
            return Err(BackendError::RoomExists(name.to_string()));
        }
        let room = RoomSummary::new(name, 1, self.max_players);
        self.rooms.insert(name.to_string(), room.clone());
        self.publish(room);
        info!("Created room '{}'", name);
        Ok(())
    }

    fn join_room(&mut self, name: &str) -> Result<(), BackendError> {
        let room = self
            .rooms
            .get_mut(name)
            .ok_or_else(|| BackendError::RoomNotFound(name.to_string()))?;
        if !room.is_joinable() {
            return Err(BackendError::RoomUnavailable(name.to_string()));
        }
        room.player_count += 1;
        let room = room.clone();
        self.publish(room);
        info!("Joined room '{}'", name);
        Ok(())
    }

    fn leave_room(&mut self, name: &str) {
        let Some(room) = self.rooms.get_mut(name) else {
            return;
        };
        room.player_count = room.player_count.saturating_sub(1);
        if room.player_count == 0 {
            room.is_open = false;
            room.removed_from_list = true;
        }
        let room = room.clone();
        if room.removed_from_list {
            self.rooms.remove(name);
        }
        self.publish(room);
        info!("Left room '{}'", name);
    }

    fn drain_room_updates(&mut self) -> Vec<RoomSummary> {
        std::mem::take(&mut self.updates)
    }
}
