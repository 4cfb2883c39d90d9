//! Carrying out menu commands against the backend.

use super::error::BackendError;
use super::service::LauncherBackend;
use crate::core::NoticeEvent;
use crate::menu::{MenuCommand, PanelId};
use crate::ui::{FormField, LauncherForms};

/// What the launcher does after a command succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum FollowUp {
    Switch { target: PanelId, notice: NoticeEvent },
    /// Collapse the menus, then enter the room
    EnterRoom(String),
    Notice(NoticeEvent),
    Quit,
}

/// Validate form input and call the backend for one command.
pub fn execute(
    command: &MenuCommand,
    backend: &mut dyn LauncherBackend,
    forms: &LauncherForms,
) -> Result<FollowUp, BackendError> {
    match command {
        MenuCommand::Quit => Ok(FollowUp::Quit),
        MenuCommand::SignIn => {
            let id = forms.value(FormField::SignInId);
            backend.sign_in(id, forms.value(FormField::SignInPassword))?;
            Ok(FollowUp::Switch {
                target: PanelId::RoomList,
                notice: NoticeEvent::info(format!("Welcome, {id}")),
            })
        }
        MenuCommand::SignUp => {
            let id = forms.value(FormField::SignUpId);
            let password = forms.value(FormField::SignUpPassword);
            if id.trim().is_empty() {
                return Err(BackendError::EmptyField("ID"));
            }
            if password != forms.value(FormField::SignUpPasswordCheck) {
                return Err(BackendError::PasswordMismatch);
            }
            backend.sign_up(id, password)?;
            Ok(FollowUp::Switch {
                target: PanelId::SignIn,
                notice: NoticeEvent::info(format!("Account '{id}' created, please sign in")),
            })
        }
        MenuCommand::CheckId => {
            let id = forms.value(FormField::SignUpId);
            if id.trim().is_empty() {
                return Err(BackendError::EmptyField("ID"));
            }
            if backend.is_id_available(id) {
                Ok(FollowUp::Notice(NoticeEvent::info(format!("ID '{id}' is available"))))
            } else {
                Err(BackendError::IdTaken(id.to_string()))
            }
        }
        MenuCommand::CreateRoom => {
            let name = forms.value(FormField::RoomName).trim();
            backend.create_room(name)?;
            Ok(FollowUp::EnterRoom(name.to_string()))
        }
        MenuCommand::JoinRoom(name) => {
            backend.join_room(name)?;
            Ok(FollowUp::EnterRoom(name.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LocalBackend;

    fn forms(fields: &[(FormField, &str)]) -> LauncherForms {
        let mut forms = LauncherForms::default();
        for (field, value) in fields {
            forms.set(*field, *value);
        }
        forms
    }

    #[test]
    fn sign_in_success_moves_to_room_list() {
        let mut backend = LocalBackend::new(3).with_account("oss", "pw");
        let forms = forms(&[(FormField::SignInId, "oss"), (FormField::SignInPassword, "pw")]);

        let follow_up = execute(&MenuCommand::SignIn, &mut backend, &forms).unwrap();
        assert!(matches!(follow_up, FollowUp::Switch { target: PanelId::RoomList, .. }));
    }

    #[test]
    fn sign_up_requires_matching_passwords() {
        let mut backend = LocalBackend::new(3);
        let forms = forms(&[
            (FormField::SignUpId, "new"),
            (FormField::SignUpPassword, "a"),
            (FormField::SignUpPasswordCheck, "b"),
        ]);

        assert_eq!(
            execute(&MenuCommand::SignUp, &mut backend, &forms),
            Err(BackendError::PasswordMismatch)
        );
        assert!(backend.is_id_available("new"));
    }

    #[test]
    fn check_id_reports_taken_ids() {
        let mut backend = LocalBackend::new(3).with_account("taken", "pw");
        let forms = forms(&[(FormField::SignUpId, "taken")]);

        assert_eq!(
            execute(&MenuCommand::CheckId, &mut backend, &forms),
            Err(BackendError::IdTaken("taken".into()))
        );
    }

    #[test]
    fn create_room_enters_the_new_room() {
        let mut backend = LocalBackend::new(3);
        let forms = forms(&[(FormField::RoomName, " arena ")]);

        assert_eq!(
            execute(&MenuCommand::CreateRoom, &mut backend, &forms),
            Ok(FollowUp::EnterRoom("arena".into()))
        );
        assert_eq!(
            execute(&MenuCommand::CreateRoom, &mut backend, &forms),
            Err(BackendError::RoomExists("arena".into()))
        );
    }
}
