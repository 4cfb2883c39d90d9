//! Menu module - panels, transitions and the navigation state machine.
//!
//! The navigator does nothing on its own: it moves only when ticked, and
//! the plugin ticks it once per frame with the frame's delta time.

mod binding;
mod config;
mod error;
mod ids;
mod layout;
mod navigator;
mod panel;
mod plugin;
mod transition;

pub use binding::{ButtonBinding, ClickAction, HoverEdge, HoverFeedback, MenuCommand};
pub use config::{ClipDef, ClipTable, MenuConfig};
pub use error::MenuError;
pub use ids::{ButtonId, PanelId, VisualTarget};
pub use layout::launcher_panels;
pub use navigator::{ClickOutcome, Navigator, SwitchPhase};
pub use panel::{Panel, PanelEvent, PanelPhase};
pub use plugin::{MenuCommandEvent, MenuPlugin, MenuSet};
pub use transition::{Completion, EffectHandle, EffectKind, EffectSpec, Outcome, TransitionRunner, VisualProps, VisualStore};
