//! FPS Launcher - the pre-game menu flow of a multiplayer shooter in Bevy.
//!
//! Sign in, sign up, pick or create a room, and drop into it. Every screen
//! change is animated: the visible panel plays its exit effects to the end
//! before the next panel starts its enter effects.
//!
//! # Architecture
//!
//! The launcher is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: App states, global events, tweening
//! - **Menu**: Panels, transition effects, the navigator
//! - **Backend**: Accounts and rooms behind a swappable service
//! - **UI**: Launcher widgets, pointer and keyboard input, notices

pub mod backend;
pub mod core;
pub mod menu;
pub mod ui;

use bevy::prelude::*;

/// Main launcher plugin that adds all sub-plugins.
pub struct LauncherPlugin;

impl Plugin for LauncherPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Menu navigation
            .add_plugins(menu::MenuPlugin)

            // Accounts and rooms
            .add_plugins(backend::BackendPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
