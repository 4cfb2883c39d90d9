//! Application state definitions that control the launcher flow.
//!
//! States determine which systems run at any given time. Menu input only
//! runs while the launcher is up; the in-room screen replaces it once a
//! room has been created or joined.

use bevy::prelude::*;

/// Main application states.
///
/// - Start in `Loading` to read the menu configuration
/// - Move to `Launcher` once the navigator has been built
/// - Enter `InRoom` after creating or joining a room
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Initial state - loading menu configuration
    #[default]
    Loading,
    /// Launcher menus (start, sign-in, lobby)
    Launcher,
    /// Player is inside a room
    InRoom,
}
