//! Button hover/press bindings.
//!
//! A binding turns the three pointer events of one button into effect runs
//! (hover feedback) and a click action.

use super::ids::{ButtonId, PanelId, VisualTarget};
use super::transition::EffectSpec;

/// Pointer crossing a button's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEdge {
    Enter,
    Exit,
}

/// Visual feedback for hover enter/exit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverFeedback {
    #[default]
    None,
    /// Scale the button to `scale` on enter and back to 1.0 on exit.
    ScalePulse { scale: f32, rate: f32 },
    /// Spin the panel's close icon to `degrees` on enter and back on exit.
    Spin { degrees: f32, rate: f32 },
}

impl HoverFeedback {
    /// Effect for one hover edge, or `None` when there is no feedback.
    pub fn effect(&self, panel: PanelId, button: ButtonId, edge: HoverEdge) -> Option<EffectSpec> {
        match *self {
            HoverFeedback::None => None,
            HoverFeedback::ScalePulse { scale, rate } => {
                let to = match edge {
                    HoverEdge::Enter => scale,
                    HoverEdge::Exit => 1.0,
                };
                Some(EffectSpec::scale(VisualTarget::Button(panel, button), to, rate))
            }
            HoverFeedback::Spin { degrees, rate } => {
                let to = match edge {
                    HoverEdge::Enter => degrees,
                    HoverEdge::Exit => 0.0,
                };
                Some(EffectSpec::spin(VisualTarget::CloseIcon(panel), to, rate))
            }
        }
    }

    /// Target this feedback drives.
    pub fn target(&self, panel: PanelId, button: ButtonId) -> Option<VisualTarget> {
        match self {
            HoverFeedback::None => None,
            HoverFeedback::ScalePulse { .. } => Some(VisualTarget::Button(panel, button)),
            HoverFeedback::Spin { .. } => Some(VisualTarget::CloseIcon(panel)),
        }
    }
}

/// Actions that leave the navigator: backend calls and app lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Quit,
    SignIn,
    SignUp,
    CheckId,
    CreateRoom,
    JoinRoom(String),
}

/// What a click does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    SwitchTo(PanelId),
    Command(MenuCommand),
}

/// Hover-enter, hover-exit and activate callbacks of one button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonBinding {
    pub hover: HoverFeedback,
    pub on_activate: ClickAction,
}

impl ButtonBinding {
    pub fn new(hover: HoverFeedback, on_activate: ClickAction) -> Self {
        Self { hover, on_activate }
    }

    pub fn switch_to(hover: HoverFeedback, panel: PanelId) -> Self {
        Self::new(hover, ClickAction::SwitchTo(panel))
    }

    pub fn command(hover: HoverFeedback, command: MenuCommand) -> Self {
        Self::new(hover, ClickAction::Command(command))
    }
}
