//! Notice bar and in-room screen.

use bevy::prelude::*;

use super::launcher::LauncherRoot;
use crate::backend::CurrentRoom;
use crate::core::{NoticeEvent, NoticeLevel};

/// Marker for the notice bar text.
#[derive(Component)]
pub struct NoticeText;

/// Marker for in-room UI entities.
#[derive(Component)]
pub struct InRoomUi;

/// How long the latest notice stays up.
#[derive(Resource)]
pub struct NoticeTimer(pub Timer);

impl Default for NoticeTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(3.0, TimerMode::Once))
    }
}

/// Spawn the notice bar (bottom of the screen).
pub fn spawn_notice_bar(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                NoticeText,
            ));
        });
}

/// Show the latest notice and restart its timer.
pub fn show_notices(
    mut notices: EventReader<NoticeEvent>,
    mut timer: ResMut<NoticeTimer>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<NoticeText>>,
) {
    let Some(notice) = notices.read().last() else {
        return;
    };
    let Ok((mut text, mut color)) = text_query.get_single_mut() else {
        return;
    };

    text.0 = notice.message.clone();
    color.0 = match notice.level {
        NoticeLevel::Info => Color::srgb(0.8, 0.8, 0.8),
        NoticeLevel::Warning => Color::srgb(0.9, 0.6, 0.3),
    };
    timer.0.reset();
}

/// Clear the notice once its timer runs out.
pub fn expire_notices(
    time: Res<Time>,
    mut timer: ResMut<NoticeTimer>,
    mut text_query: Query<&mut Text, With<NoticeText>>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        for mut text in text_query.iter_mut() {
            text.0.clear();
        }
    }
}

/// Hide the launcher and show the room screen.
pub fn setup_in_room(
    mut commands: Commands,
    current_room: Res<CurrentRoom>,
    mut launcher_query: Query<&mut Visibility, With<LauncherRoot>>,
) {
    for mut visibility in launcher_query.iter_mut() {
        *visibility = Visibility::Hidden;
    }

    let room = current_room.0.clone().unwrap_or_default();
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.03, 0.04, 0.05)),
            InRoomUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Room: {room}")),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Press Esc to leave"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
            ));
        });
}

/// Remove the room screen and bring the launcher back.
pub fn cleanup_in_room(
    mut commands: Commands,
    room_query: Query<Entity, With<InRoomUi>>,
    mut launcher_query: Query<&mut Visibility, With<LauncherRoot>>,
) {
    for entity in room_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for mut visibility in launcher_query.iter_mut() {
        *visibility = Visibility::Inherited;
    }
}
