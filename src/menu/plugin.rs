//! Menu plugin - builds the navigator and advances it every frame.

use bevy::prelude::*;

use super::binding::MenuCommand;
use super::config::MenuConfig;
use super::ids::PanelId;
use super::navigator::Navigator;
use super::panel::PanelEvent;
use crate::core::AppState;

/// Ordering of menu work within a frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSet {
    /// Pointer and command handling that issues requests
    Input,
    /// Advance effects and switches
    Tick,
    /// Mirror visual state into the scene
    Sync,
}

/// Sent when a menu button asks for an action outside the navigator
/// (backend calls, quitting).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MenuCommandEvent(pub MenuCommand);

/// Menu plugin - owns the navigator lifecycle.
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PanelEvent>()
            .add_event::<MenuCommandEvent>()
            .configure_sets(Update, (MenuSet::Input, MenuSet::Tick, MenuSet::Sync).chain())
            .add_systems(OnEnter(AppState::Loading), setup_navigator)
            .add_systems(OnEnter(AppState::Launcher), open_start_menu)
            .add_systems(
                Update,
                tick_navigator
                    .in_set(MenuSet::Tick)
                    .run_if(resource_exists::<Navigator>),
            );
    }
}

/// Load the menu config and build the navigator, then enter the launcher.
fn setup_navigator(
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    let config = MenuConfig::load();
    match Navigator::from_config(&config) {
        Ok(navigator) => {
            commands.insert_resource(navigator);
            commands.insert_resource(config);
            next_state.set(AppState::Launcher);
        }
        Err(e) => {
            error!("Failed to build menu: {}", e);
            exit.send(AppExit::error());
        }
    }
}

/// Show the start screen whenever the launcher comes up.
fn open_start_menu(mut navigator: ResMut<Navigator>) {
    if let Err(e) = navigator.request_switch(PanelId::Start) {
        error!("Failed to open start menu: {}", e);
    }
}

/// Advance the navigator by the frame's delta time.
fn tick_navigator(time: Res<Time>, mut navigator: ResMut<Navigator>, mut panel_events: EventWriter<PanelEvent>) {
    for event in navigator.tick(time.delta_secs()) {
        match event {
            PanelEvent::Shown(id) => debug!("Panel {} shown", id),
            PanelEvent::Hidden(id) => debug!("Panel {} hidden", id),
        }
        panel_events.send(event);
    }
}
