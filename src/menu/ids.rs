//! Identifiers for panels, buttons and the visual targets effects drive.

use std::fmt;
use std::str::FromStr;

use super::error::MenuError;

/// One named menu screen. `None` means "no panel shown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelId {
    #[default]
    None,
    Start,
    SignIn,
    SignUp,
    RoomList,
    CreateRoom,
}

impl PanelId {
    /// Every panel a navigator must own (excludes `None`).
    pub const SCREENS: [PanelId; 5] = [
        PanelId::Start,
        PanelId::SignIn,
        PanelId::SignUp,
        PanelId::RoomList,
        PanelId::CreateRoom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PanelId::None => "None",
            PanelId::Start => "Start",
            PanelId::SignIn => "SignIn",
            PanelId::SignUp => "SignUp",
            PanelId::RoomList => "RoomList",
            PanelId::CreateRoom => "CreateRoom",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelId {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(PanelId::None)
            .chain(PanelId::SCREENS)
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MenuError::UnknownPanel(s.to_string()))
    }
}

/// Buttons a panel can own. Keys are unique per panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Start,
    /// Close button; the start screen's quit button.
    Close,
    CreateRoom,
    SignUp,
    SignIn,
    /// Sign-up id availability check.
    Check,
}

/// Something an effect can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualTarget {
    /// Root of a panel; clip playback fades it.
    Panel(PanelId),
    Button(PanelId, ButtonId),
    /// Foreground icon of a panel's close button.
    CloseIcon(PanelId),
    /// Launcher title text, owned by the start screen.
    Title,
    /// Background blur overlay, owned by the start screen.
    Blur,
}

impl VisualTarget {
    /// Buttons and icons are shown with their panel; panels, the title and
    /// the blur overlay start concealed and are revealed by effects.
    pub fn starts_visible(&self) -> bool {
        matches!(self, VisualTarget::Button(..) | VisualTarget::CloseIcon(_))
    }
}
