//! Global events used for cross-plugin communication.

use bevy::prelude::*;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
    #[default]
    Info,
    Warning,
}

/// Short message shown to the user in the notice bar.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct NoticeEvent {
    pub message: String,
    pub level: NoticeLevel,
}

impl NoticeEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Warning,
        }
    }
}

/// Sent once the player is inside a room.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct JoinedRoomEvent {
    pub room: String,
}
