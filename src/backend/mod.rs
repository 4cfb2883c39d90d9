//! Backend module - accounts, rooms and the commands that call them.

mod commands;
mod error;
mod plugin;
mod rooms;
mod service;

pub use commands::{execute, FollowUp};
pub use error::BackendError;
pub use plugin::{enter_pending_room, handle_menu_commands, BackendPlugin, CurrentRoom, PendingRoom};
pub use rooms::{RoomListUpdated, RoomListView, RoomSummary};
pub use service::{Backend, LauncherBackend, LocalBackend};
