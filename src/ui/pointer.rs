//! Translate Bevy `Interaction` changes into menu pointer events.

use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;

use super::forms::{FormField, LauncherForms};
use super::launcher::{MenuButton, PreviousInteraction, RoomEntry};
use crate::menu::{ClickOutcome, HoverEdge, MenuCommand, MenuCommandEvent, Navigator, Panel, PanelEvent, PanelId};

/// Pointer event derived from an interaction change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEdge {
    Enter,
    Exit,
    Click,
}

/// Pointer events implied by moving from `previous` to `now`.
pub fn pointer_edges(previous: Interaction, now: Interaction) -> &'static [PointerEdge] {
    match (previous, now) {
        (Interaction::None, Interaction::Hovered) => &[PointerEdge::Enter],
        (Interaction::None, Interaction::Pressed) => &[PointerEdge::Enter, PointerEdge::Click],
        (Interaction::Hovered, Interaction::Pressed) => &[PointerEdge::Click],
        (Interaction::Hovered | Interaction::Pressed, Interaction::None) => &[PointerEdge::Exit],
        _ => &[],
    }
}

/// Feed menu button hovers and clicks to the navigator.
pub fn menu_pointer_input(
    mut navigator: ResMut<Navigator>,
    mut button_query: Query<(&Interaction, &MenuButton, &mut PreviousInteraction), Changed<Interaction>>,
    mut commands_out: EventWriter<MenuCommandEvent>,
) {
    for (interaction, menu_button, mut previous) in button_query.iter_mut() {
        let edges = pointer_edges(previous.0, *interaction);
        previous.0 = *interaction;

        let MenuButton { panel, button } = *menu_button;
        for edge in edges {
            let result = match edge {
                PointerEdge::Enter => navigator.hover(panel, button, HoverEdge::Enter).map(|_| ()),
                PointerEdge::Exit => navigator.hover(panel, button, HoverEdge::Exit).map(|_| ()),
                PointerEdge::Click => navigator.click(panel, button).map(|outcome| match outcome {
                    ClickOutcome::Command(command) => {
                        commands_out.send(MenuCommandEvent(command));
                    }
                    ClickOutcome::Switched(target) => debug!("{:?} on {} -> {}", button, panel, target),
                    ClickOutcome::Ignored => {}
                }),
            };
            if let Err(e) = result {
                error!("Pointer {:?} on {:?}/{} failed: {}", edge, button, panel, e);
            }
        }
    }
}

/// Join a room when its lobby entry is clicked.
pub fn room_entry_input(
    navigator: Res<Navigator>,
    entry_query: Query<(&Interaction, &RoomEntry), Changed<Interaction>>,
    mut commands_out: EventWriter<MenuCommandEvent>,
) {
    let lobby_ready = navigator
        .panel(PanelId::RoomList)
        .is_some_and(Panel::accepts_input);

    for (interaction, entry) in entry_query.iter() {
        if *interaction == Interaction::Pressed && lobby_ready {
            commands_out.send(MenuCommandEvent(MenuCommand::JoinRoom(entry.0.clone())));
        }
    }
}

/// Focus a text field when it is clicked.
pub fn focus_fields(
    field_query: Query<(&Interaction, &FormField), Changed<Interaction>>,
    mut forms: ResMut<LauncherForms>,
) {
    for (interaction, field) in field_query.iter() {
        if *interaction == Interaction::Pressed {
            forms.focus(Some(*field));
        }
    }
}

/// Route typed keys to the focused field while its panel takes input.
pub fn keyboard_text_input(
    navigator: Res<Navigator>,
    mut keys: EventReader<KeyboardInput>,
    mut forms: ResMut<LauncherForms>,
) {
    let accepting = forms
        .focused()
        .and_then(|field| navigator.panel(field.panel()))
        .is_some_and(Panel::accepts_input);

    for event in keys.read() {
        if !accepting || event.state != ButtonState::Pressed {
            continue;
        }
        match &event.logical_key {
            Key::Character(text) => forms.type_text(text.as_str()),
            Key::Space => forms.type_text(" "),
            Key::Backspace => forms.backspace(),
            Key::Tab => forms.focus_next(),
            _ => {}
        }
    }
}

/// Let go of fields on panels that have finished hiding.
pub fn release_hidden_focus(mut panel_events: EventReader<PanelEvent>, mut forms: ResMut<LauncherForms>) {
    for event in panel_events.read() {
        if let PanelEvent::Hidden(panel) = event {
            forms.unfocus_panel(*panel);
        }
    }
}
