//! Backend plugin - runs menu commands and relays room updates.

use bevy::prelude::*;

use super::commands::{execute, FollowUp};
use super::rooms::{RoomListUpdated, RoomListView};
use super::service::{Backend, LocalBackend};
use crate::core::{AppState, JoinedRoomEvent, NoticeEvent};
use crate::menu::{MenuCommandEvent, MenuConfig, MenuSet, Navigator, PanelId};
use crate::ui::LauncherForms;

/// Room waiting for the menus to collapse before it is entered.
#[derive(Resource, Debug, Default)]
pub struct PendingRoom(pub Option<String>);

/// Room the player is in.
#[derive(Resource, Debug, Default)]
pub struct CurrentRoom(pub Option<String>);

/// Backend plugin - auth and room calls.
pub struct BackendPlugin;

impl Plugin for BackendPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RoomListUpdated>()
            .init_resource::<RoomListView>()
            .init_resource::<PendingRoom>()
            .init_resource::<CurrentRoom>()
            .add_systems(
                OnEnter(AppState::Launcher),
                install_local_backend.run_if(not(resource_exists::<Backend>)),
            )
            .add_systems(OnExit(AppState::InRoom), leave_current_room)
            .add_systems(
                Update,
                (handle_menu_commands, poll_room_updates, apply_room_updates)
                    .chain()
                    .in_set(MenuSet::Input)
                    .run_if(resource_exists::<Backend>)
                    .run_if(resource_exists::<Navigator>),
            )
            .add_systems(
                Update,
                enter_pending_room
                    .after(MenuSet::Tick)
                    .run_if(resource_exists::<Navigator>),
            );
    }
}

/// Use the in-process backend unless the app installed another one.
fn install_local_backend(mut commands: Commands, config: Option<Res<MenuConfig>>) {
    let max_players = config.map_or(MenuConfig::default().max_players, |config| config.max_players);
    info!("Using local backend ({} players per room)", max_players);
    commands.insert_resource(Backend::new(LocalBackend::new(max_players)));
}

/// Run each requested command and apply its follow-up.
pub fn handle_menu_commands(
    mut requests: EventReader<MenuCommandEvent>,
    mut backend: ResMut<Backend>,
    mut navigator: ResMut<Navigator>,
    mut forms: ResMut<LauncherForms>,
    mut pending_room: ResMut<PendingRoom>,
    mut notices: EventWriter<NoticeEvent>,
    mut exit: EventWriter<AppExit>,
) {
    for MenuCommandEvent(command) in requests.read() {
        let follow_up = match execute(command, backend.0.as_mut(), &forms) {
            Ok(follow_up) => follow_up,
            Err(e) => {
                warn!("{:?} failed: {}", command, e);
                notices.send(NoticeEvent::warning(e.to_string()));
                continue;
            }
        };

        match follow_up {
            FollowUp::Quit => {
                info!("Quit requested");
                exit.send(AppExit::Success);
            }
            FollowUp::Notice(notice) => {
                notices.send(notice);
            }
            FollowUp::Switch { target, notice } => {
                if let Err(e) = navigator.request_switch(target) {
                    error!("Switch to {} failed: {}", target, e);
                    continue;
                }
                notices.send(notice);
            }
            FollowUp::EnterRoom(room) => {
                if let Err(e) = navigator.request_switch(PanelId::None) {
                    error!("Closing menus failed: {}", e);
                    continue;
                }
                forms.clear_panel(PanelId::CreateRoom);
                pending_room.0 = Some(room);
            }
        }
    }
}

/// Forward backend room changes as events.
fn poll_room_updates(mut backend: ResMut<Backend>, mut updated: EventWriter<RoomListUpdated>) {
    let updates = backend.0.drain_room_updates();
    if !updates.is_empty() {
        updated.send(RoomListUpdated(updates));
    }
}

fn apply_room_updates(mut updated: EventReader<RoomListUpdated>, mut view: ResMut<RoomListView>) {
    for RoomListUpdated(rooms) in updated.read() {
        if view.apply(rooms) {
            debug!("Room list now has {} room(s)", view.rooms().len());
        }
    }
}

/// Enter the pending room once the menus have fully collapsed.
pub fn enter_pending_room(
    navigator: Res<Navigator>,
    mut pending_room: ResMut<PendingRoom>,
    mut current_room: ResMut<CurrentRoom>,
    mut joined: EventWriter<JoinedRoomEvent>,
) {
    if pending_room.0.is_none() || !navigator.is_settled() || navigator.current() != PanelId::None {
        return;
    }
    if let Some(room) = pending_room.0.take() {
        current_room.0 = Some(room.clone());
        joined.send(JoinedRoomEvent { room });
    }
}

fn leave_current_room(mut backend: ResMut<Backend>, mut current_room: ResMut<CurrentRoom>) {
    if let Some(room) = current_room.0.take() {
        backend.0.leave_room(&room);
    }
}
