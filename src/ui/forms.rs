//! Text fields of the sign-in, sign-up and create-room panels.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::menu::PanelId;

const MAX_FIELD_LEN: usize = 24;

/// One text input in the launcher.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    SignInId,
    SignInPassword,
    SignUpId,
    SignUpPassword,
    SignUpPasswordCheck,
    RoomName,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::SignInId,
        FormField::SignInPassword,
        FormField::SignUpId,
        FormField::SignUpPassword,
        FormField::SignUpPasswordCheck,
        FormField::RoomName,
    ];

    /// Panel the field lives on.
    pub fn panel(&self) -> PanelId {
        match self {
            FormField::SignInId | FormField::SignInPassword => PanelId::SignIn,
            FormField::SignUpId | FormField::SignUpPassword | FormField::SignUpPasswordCheck => PanelId::SignUp,
            FormField::RoomName => PanelId::CreateRoom,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::SignInId | FormField::SignUpId => "ID",
            FormField::SignInPassword | FormField::SignUpPassword => "PW",
            FormField::SignUpPasswordCheck => "PW check",
            FormField::RoomName => "Room name",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            FormField::SignInPassword | FormField::SignUpPassword | FormField::SignUpPasswordCheck
        )
    }

    /// Fields of one panel, in tab order.
    pub fn on_panel(panel: PanelId) -> impl Iterator<Item = FormField> {
        Self::ALL.into_iter().filter(move |field| field.panel() == panel)
    }
}

/// Current text of every field and which one has keyboard focus.
#[derive(Resource, Debug, Clone, Default)]
pub struct LauncherForms {
    values: HashMap<FormField, String>,
    focused: Option<FormField>,
}

impl LauncherForms {
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let mut value: String = value.into();
        let cap = value.char_indices().nth(MAX_FIELD_LEN).map_or(value.len(), |(i, _)| i);
        value.truncate(cap);
        self.values.insert(field, value);
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn focus(&mut self, field: Option<FormField>) {
        self.focused = field;
    }

    /// Move focus to the next field on the focused field's panel.
    pub fn focus_next(&mut self) {
        let Some(current) = self.focused else {
            return;
        };
        let fields: Vec<FormField> = FormField::on_panel(current.panel()).collect();
        if let Some(index) = fields.iter().position(|field| *field == current) {
            self.focused = Some(fields[(index + 1) % fields.len()]);
        }
    }

    /// Append typed text to the focused field.
    pub fn type_text(&mut self, text: &str) {
        let Some(field) = self.focused else {
            return;
        };
        let typed: String = text.chars().filter(|c| !c.is_control()).collect();
        let value = format!("{}{}", self.value(field), typed);
        self.set(field, value);
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused {
            if let Some(value) = self.values.get_mut(&field) {
                value.pop();
            }
        }
    }

    /// Text as it should be rendered (secrets masked).
    pub fn display(&self, field: FormField) -> String {
        let value = self.value(field);
        if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }

    /// Forget everything typed on a panel.
    pub fn clear_panel(&mut self, panel: PanelId) {
        for field in FormField::on_panel(panel) {
            self.values.remove(&field);
        }
        self.unfocus_panel(panel);
    }

    /// Drop keyboard focus if it sits on one of the panel's fields.
    pub fn unfocus_panel(&mut self, panel: PanelId) {
        if self.focused.is_some_and(|field| field.panel() == panel) {
            self.focused = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut forms = LauncherForms::default();
        forms.type_text("ignored");
        assert_eq!(forms.value(FormField::SignInId), "");

        forms.focus(Some(FormField::SignInId));
        forms.type_text("oss");
        forms.backspace();
        forms.type_text("s\n");
        assert_eq!(forms.value(FormField::SignInId), "oss");
    }

    #[test]
    fn tab_cycles_within_a_panel() {
        let mut forms = LauncherForms::default();
        forms.focus(Some(FormField::SignUpPassword));
        forms.focus_next();
        assert_eq!(forms.focused(), Some(FormField::SignUpPasswordCheck));
        forms.focus_next();
        assert_eq!(forms.focused(), Some(FormField::SignUpId));
    }

    #[test]
    fn secrets_are_masked_and_length_is_capped() {
        let mut forms = LauncherForms::default();
        forms.set(FormField::SignInPassword, "hunter2");
        assert_eq!(forms.display(FormField::SignInPassword), "*******");

        forms.set(FormField::RoomName, "x".repeat(40));
        assert_eq!(forms.value(FormField::RoomName).len(), MAX_FIELD_LEN);
    }

    #[test]
    fn clearing_a_panel_drops_its_focus() {
        let mut forms = LauncherForms::default();
        forms.focus(Some(FormField::RoomName));
        forms.type_text("arena");
        forms.clear_panel(PanelId::CreateRoom);
        assert_eq!(forms.value(FormField::RoomName), "");
        assert_eq!(forms.focused(), None);
    }

    #[test]
    fn unfocusing_another_panel_keeps_focus() {
        let mut forms = LauncherForms::default();
        forms.focus(Some(FormField::SignInId));
        forms.type_text("ace");

        forms.unfocus_panel(PanelId::SignUp);
        assert_eq!(forms.focused(), Some(FormField::SignInId));

        forms.unfocus_panel(PanelId::SignIn);
        assert_eq!(forms.focused(), None);
        assert_eq!(forms.value(FormField::SignInId), "ace");
    }
}
