//! Launcher scene: title, blur overlay and the five menu panels.

use bevy::prelude::*;

use super::forms::FormField;
use crate::menu::{ButtonId, PanelId, VisualTarget};

const COLOR_SCREEN: Color = Color::srgb(0.05, 0.05, 0.08);
const COLOR_PANEL: Color = Color::srgba(0.1, 0.1, 0.14, 0.95);
const COLOR_BUTTON: Color = Color::srgb(0.15, 0.15, 0.2);
const COLOR_FIELD: Color = Color::srgb(0.08, 0.08, 0.1);
const COLOR_TEXT: Color = Color::srgb(0.8, 0.8, 0.85);
const COLOR_TITLE: Color = Color::srgb(0.8, 0.7, 0.6);
const COLOR_BLUR: Color = Color::srgba(0.02, 0.02, 0.05, 1.0);

/// Root of the whole launcher tree.
#[derive(Component)]
pub struct LauncherRoot;

/// Marker for the menu camera.
#[derive(Component)]
pub struct MenuCamera;

/// Entity mirrors the visual state of a menu target.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualLink(pub VisualTarget);

/// Untinted color an entity fades from.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseColor(pub Color);

/// Button owned by a menu panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuButton {
    pub panel: PanelId,
    pub button: ButtonId,
}

/// Interaction seen on the previous frame, to derive pointer edges.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PreviousInteraction(pub Interaction);

/// Text node rendering a form field's value.
#[derive(Component, Debug, Clone, Copy)]
pub struct FieldText(pub FormField);

/// Container the room list entries are spawned under.
#[derive(Component)]
pub struct RoomListContent;

/// Joinable room entry in the lobby.
#[derive(Component, Debug, Clone)]
pub struct RoomEntry(pub String);

/// Set up the menu camera.
pub fn spawn_menu_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MenuCamera));
}

/// Spawn the launcher tree. Panels start hidden; the navigator reveals them.
pub fn spawn_launcher(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(COLOR_SCREEN),
            LauncherRoot,
        ))
        .with_children(|parent| {
            // Background blur
            parent.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    position_type: PositionType::Absolute,
                    ..default()
                },
                BackgroundColor(COLOR_BLUR.with_alpha(0.0)),
                BaseColor(COLOR_BLUR),
                Visibility::Hidden,
                VisualLink(VisualTarget::Blur),
            ));

            // Title
            parent.spawn((
                Text::new("OSS"),
                TextFont {
                    font_size: 80.0,
                    ..default()
                },
                TextColor(COLOR_TITLE),
                BaseColor(COLOR_TITLE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Percent(12.0),
                    ..default()
                },
                Visibility::Hidden,
                VisualLink(VisualTarget::Title),
            ));

            spawn_start_panel(parent);
            spawn_sign_in_panel(parent);
            spawn_sign_up_panel(parent);
            spawn_room_list_panel(parent);
            spawn_create_room_panel(parent);
        });
}

/// Helper to spawn a hidden panel root and fill it.
fn spawn_panel(parent: &mut ChildBuilder, panel: PanelId, fill: impl FnOnce(&mut ChildBuilder)) {
    parent
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(30.0)),
                min_width: Val::Px(360.0),
                ..default()
            },
            BackgroundColor(COLOR_PANEL),
            BaseColor(COLOR_PANEL),
            Visibility::Hidden,
            VisualLink(VisualTarget::Panel(panel)),
        ))
        .with_children(fill);
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, panel: PanelId, button: ButtonId) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(200.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(COLOR_BUTTON),
            MenuButton { panel, button },
            PreviousInteraction::default(),
            VisualLink(VisualTarget::Button(panel, button)),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(COLOR_TEXT),
            ));
        });
}

/// Close button in the panel's top-right corner; its icon spins on hover.
fn spawn_close_button(parent: &mut ChildBuilder, panel: PanelId) {
    parent
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                right: Val::Px(8.0),
                width: Val::Px(32.0),
                height: Val::Px(32.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(COLOR_BUTTON),
            MenuButton {
                panel,
                button: ButtonId::Close,
            },
            PreviousInteraction::default(),
            VisualLink(VisualTarget::Button(panel, ButtonId::Close)),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("X"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(COLOR_TEXT),
                VisualLink(VisualTarget::CloseIcon(panel)),
            ));
        });
}

/// Clickable text field.
fn spawn_field(parent: &mut ChildBuilder, field: FormField) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::vertical(Val::Px(6.0)),
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(field.label()),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(COLOR_TEXT),
                Node {
                    width: Val::Px(100.0),
                    ..default()
                },
            ));
            row.spawn((
                Button,
                Node {
                    width: Val::Px(220.0),
                    height: Val::Px(32.0),
                    padding: UiRect::horizontal(Val::Px(8.0)),
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(COLOR_FIELD),
                field,
            ))
            .with_children(|input| {
                input.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(COLOR_TEXT),
                    FieldText(field),
                ));
            });
        });
}

fn spawn_heading(parent: &mut ChildBuilder, text: &str) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(COLOR_TEXT),
        Node {
            margin: UiRect::bottom(Val::Px(20.0)),
            ..default()
        },
    ));
}

fn spawn_start_panel(parent: &mut ChildBuilder) {
    spawn_panel(parent, PanelId::Start, |panel| {
        spawn_menu_button(panel, "Start", PanelId::Start, ButtonId::Start);
        spawn_menu_button(panel, "Quit", PanelId::Start, ButtonId::Close);
    });
}

fn spawn_sign_in_panel(parent: &mut ChildBuilder) {
    spawn_panel(parent, PanelId::SignIn, |panel| {
        spawn_close_button(panel, PanelId::SignIn);
        spawn_heading(panel, "Sign In");
        spawn_field(panel, FormField::SignInId);
        spawn_field(panel, FormField::SignInPassword);
        spawn_menu_button(panel, "Sign In", PanelId::SignIn, ButtonId::SignIn);
        spawn_menu_button(panel, "Sign Up", PanelId::SignIn, ButtonId::SignUp);
    });
}

fn spawn_sign_up_panel(parent: &mut ChildBuilder) {
    spawn_panel(parent, PanelId::SignUp, |panel| {
        spawn_close_button(panel, PanelId::SignUp);
        spawn_heading(panel, "Sign Up");
        spawn_field(panel, FormField::SignUpId);
        spawn_menu_button(panel, "Check ID", PanelId::SignUp, ButtonId::Check);
        spawn_field(panel, FormField::SignUpPassword);
        spawn_field(panel, FormField::SignUpPasswordCheck);
        spawn_menu_button(panel, "Sign Up", PanelId::SignUp, ButtonId::SignUp);
    });
}

fn spawn_room_list_panel(parent: &mut ChildBuilder) {
    spawn_panel(parent, PanelId::RoomList, |panel| {
        spawn_close_button(panel, PanelId::RoomList);
        spawn_heading(panel, "Rooms");
        panel.spawn((
            Node {
                flex_direction: FlexDirection::Column,
                width: Val::Px(300.0),
                min_height: Val::Px(160.0),
                margin: UiRect::bottom(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(COLOR_FIELD),
            RoomListContent,
        ));
        spawn_menu_button(panel, "Create Room", PanelId::RoomList, ButtonId::CreateRoom);
    });
}

fn spawn_create_room_panel(parent: &mut ChildBuilder) {
    spawn_panel(parent, PanelId::CreateRoom, |panel| {
        spawn_close_button(panel, PanelId::CreateRoom);
        spawn_heading(panel, "Create Room");
        spawn_field(panel, FormField::RoomName);
        spawn_menu_button(panel, "Create", PanelId::CreateRoom, ButtonId::CreateRoom);
    });
}

/// Rebuild the lobby's room entries when the room list changes.
pub fn rebuild_room_list(
    mut commands: Commands,
    view: Res<crate::backend::RoomListView>,
    content_query: Query<Entity, With<RoomListContent>>,
) {
    if !view.is_changed() {
        return;
    }
    let Ok(content) = content_query.get_single() else {
        return;
    };

    commands.entity(content).despawn_descendants().with_children(|list| {
        for room in view.rooms() {
            list.spawn((
                Button,
                Node {
                    height: Val::Px(32.0),
                    padding: UiRect::horizontal(Val::Px(8.0)),
                    align_items: AlignItems::Center,
                    ..default()
                },
                BackgroundColor(COLOR_BUTTON),
                RoomEntry(room.clone()),
            ))
            .with_children(|entry| {
                entry.spawn((
                    Text::new(room.as_str()),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(COLOR_TEXT),
                ));
            });
        }
    });
}
