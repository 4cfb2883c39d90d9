//! FPS Launcher - Entry Point
//!
//! Controls:
//! - Mouse: Hover and click menu buttons
//! - Keyboard: Type into the focused field, Tab to the next one
//! - Escape: Leave the current room

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "FPS Launcher".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our launcher plugin
        .add_plugins(fps_launcher::LauncherPlugin)

        .run();
}
