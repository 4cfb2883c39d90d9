//! Error types for backend calls.

use thiserror::Error;

/// Rejections from the auth/room backend and form validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// A required form field is blank.
    #[error("Please fill in {0}")]
    EmptyField(&'static str),

    /// Sign-up password and its confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Sign-up id is already registered.
    #[error("ID '{0}' is already taken")]
    IdTaken(String),

    /// Unknown id or wrong password.
    #[error("Invalid ID or password")]
    InvalidCredentials,

    /// A room with this name already exists.
    #[error("A room named '{0}' already exists, please choose another name")]
    RoomExists(String),

    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    /// Room is closed or full.
    #[error("Room '{0}' cannot be joined")]
    RoomUnavailable(String),
}
