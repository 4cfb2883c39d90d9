//! Core plugin that sets up app states and global events.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - App states (Loading, Launcher, InRoom)
/// - Global events (NoticeEvent, JoinedRoomEvent)
/// - Leaving a room with Escape
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize app states
            .init_state::<AppState>()

            // Register global events
            .add_event::<NoticeEvent>()
            .add_event::<JoinedRoomEvent>()

            // Enter the room screen once the backend confirms
            .add_systems(Update, enter_room.run_if(in_state(AppState::Launcher)))

            // Leave the room with Escape
            .add_systems(Update, handle_leave_input.run_if(in_state(AppState::InRoom)));
    }
}

/// Switch to the in-room screen when a join is confirmed.
fn enter_room(
    mut joined: EventReader<JoinedRoomEvent>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if let Some(event) = joined.read().last() {
        info!("Entering room '{}'", event.room);
        next_state.set(AppState::InRoom);
    }
}

/// Handle Escape key to leave the current room.
fn handle_leave_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(AppState::Launcher);
    }
}
