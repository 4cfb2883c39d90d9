//! Error types for building and driving the menu navigator.

use thiserror::Error;

use super::ids::{ButtonId, PanelId};

/// Errors raised by navigator construction and requests.
#[derive(Debug, Error, PartialEq)]
pub enum MenuError {
    /// Requested panel is not part of this navigator.
    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    /// A required panel was not supplied at construction.
    #[error("Missing panel: {0}")]
    MissingPanel(PanelId),

    /// The same panel was supplied twice.
    #[error("Duplicate panel: {0}")]
    DuplicatePanel(PanelId),

    /// Button is not bound on the given panel.
    #[error("Panel {panel} has no button {button:?}")]
    UnknownButton { panel: PanelId, button: ButtonId },

    /// A choreography references a clip the clip table doesn't know.
    #[error("Clip '{clip}' used by panel {panel} is not in the clip table")]
    MissingClip { panel: PanelId, clip: String },

    /// Start panel has no collapse choreography for the CreateRoom cascade.
    #[error("Start panel has no collapse effects")]
    MissingCascade,
}
