//! UI plugin - launcher screens, pointer input, and notices.

use bevy::prelude::*;

use super::forms::LauncherForms;
use super::launcher::{rebuild_room_list, spawn_launcher, spawn_menu_camera};
use super::overlay::{
    cleanup_in_room, expire_notices, setup_in_room, show_notices, spawn_notice_bar, NoticeTimer,
};
use super::pointer::{
    focus_fields, keyboard_text_input, menu_pointer_input, release_hidden_focus, room_entry_input,
};
use super::sync::{sync_field_text, sync_visuals};
use crate::core::AppState;
use crate::menu::{MenuConfig, MenuSet, Navigator};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LauncherForms>()
            .init_resource::<NoticeTimer>()
            .add_systems(Startup, (spawn_menu_camera, spawn_launcher, spawn_notice_bar))

            // Launcher input
            .add_systems(
                Update,
                (menu_pointer_input, room_entry_input, focus_fields, keyboard_text_input)
                    .in_set(MenuSet::Input)
                    .run_if(in_state(AppState::Launcher))
                    .run_if(resource_exists::<Navigator>),
            )

            // Scene mirroring
            .add_systems(
                Update,
                (
                    rebuild_room_list,
                    release_hidden_focus,
                    sync_field_text.after(release_hidden_focus),
                    sync_visuals
                        .run_if(resource_exists::<Navigator>)
                        .run_if(resource_exists::<MenuConfig>),
                )
                    .in_set(MenuSet::Sync),
            )
            .add_systems(Update, (show_notices, expire_notices).chain())

            // In-room screen
            .add_systems(OnEnter(AppState::InRoom), setup_in_room)
            .add_systems(OnExit(AppState::InRoom), cleanup_in_room);
    }
}
