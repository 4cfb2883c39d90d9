//! User interface: launcher screens, form input, and notices.

mod forms;
mod launcher;
mod overlay;
mod plugin;
mod pointer;
mod sync;

pub use forms::{FormField, LauncherForms};
pub use launcher::{BaseColor, FieldText, LauncherRoot, MenuButton, RoomEntry, VisualLink};
pub use overlay::{InRoomUi, NoticeText};
pub use plugin::UiPlugin;
pub use pointer::{pointer_edges, release_hidden_focus, PointerEdge};
pub use sync::blur_alpha;
