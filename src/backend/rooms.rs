//! Room summaries and the room list shown in the lobby.

use bevy::prelude::*;

/// What the backend reports about one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    pub name: String,
    pub player_count: u32,
    pub max_players: u32,
    pub is_open: bool,
    /// Room closed for good; drop it from any list
    pub removed_from_list: bool,
}

impl RoomSummary {
    pub fn new(name: impl Into<String>, player_count: u32, max_players: u32) -> Self {
        Self {
            name: name.into(),
            player_count,
            max_players,
            is_open: true,
            removed_from_list: false,
        }
    }

    pub fn is_joinable(&self) -> bool {
        self.is_open && !self.removed_from_list && self.player_count < self.max_players
    }
}

/// Push-style room list notification from the backend.
#[derive(Event, Debug, Clone, Default)]
pub struct RoomListUpdated(pub Vec<RoomSummary>);

/// Room names currently listed in the lobby, in arrival order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomListView {
    rooms: Vec<String>,
}

impl RoomListView {
    /// Fold a batch of room updates into the list.
    ///
    /// Rooms flagged as removed are dropped; unseen rooms are added only
    /// while open and not full. Returns whether the list changed.
    pub fn apply(&mut self, updates: &[RoomSummary]) -> bool {
        let mut changed = false;
        for room in updates {
            let index = self.rooms.iter().position(|name| *name == room.name);
            match index {
                Some(index) if room.removed_from_list => {
                    self.rooms.remove(index);
                    changed = true;
                }
                None if room.is_joinable() => {
                    self.rooms.push(room.name.clone());
                    changed = true;
                }
                _ => {}
            }
        }
        changed
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
