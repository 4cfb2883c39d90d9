//! The launcher's panel set and how each panel is wired.

use super::binding::{ButtonBinding, HoverFeedback, MenuCommand};
use super::config::MenuConfig;
use super::ids::{ButtonId, PanelId, VisualTarget};
use super::panel::Panel;
use super::transition::EffectSpec;

/// Clip-faded panel with `OnEnable_<suffix>` / `OnDisable_<suffix>` clips.
fn clip_panel(id: PanelId, suffix: &str) -> Panel {
    let root = VisualTarget::Panel(id);
    Panel::new(id)
        .with_enter([EffectSpec::clip(root, format!("OnEnable_{suffix}")).revealing()])
        .with_exit([EffectSpec::clip(root, format!("OnDisable_{suffix}")).concealing()])
}

/// Build all five launcher panels.
pub fn launcher_panels(config: &MenuConfig) -> Vec<Panel> {
    let rate = config.tween_rate;
    let pulse = HoverFeedback::ScalePulse {
        scale: config.hover_scale,
        rate,
    };
    let spin = HoverFeedback::Spin {
        degrees: config.close_spin_degrees,
        rate,
    };
    let clear_blur = EffectSpec::blur(VisualTarget::Blur, config.blur_radius_clear, rate).concealing();

    let start = Panel::new(PanelId::Start)
        .with_enter([
            EffectSpec::clip(VisualTarget::Panel(PanelId::Start), "OnEnable_StartMenuButtons").revealing(),
            EffectSpec::clip(VisualTarget::Title, "Title_OnEnable").revealing(),
            clear_blur.clone(),
        ])
        .with_exit([
            EffectSpec::blur(VisualTarget::Blur, config.blur_radius_max, rate).revealing(),
            EffectSpec::clip(VisualTarget::Panel(PanelId::Start), "OnDisable_StartMenuButtons").concealing(),
        ])
        .with_collapse([
            EffectSpec::clip(VisualTarget::Title, "Title_OnDisable").concealing(),
            clear_blur,
        ])
        .with_button(ButtonId::Start, ButtonBinding::switch_to(pulse, PanelId::SignIn))
        .with_button(ButtonId::Close, ButtonBinding::command(pulse, MenuCommand::Quit));

    let sign_in = clip_panel(PanelId::SignIn, "SignIn")
        .with_button(ButtonId::Close, ButtonBinding::switch_to(spin, PanelId::Start))
        .with_button(ButtonId::SignUp, ButtonBinding::switch_to(HoverFeedback::None, PanelId::SignUp))
        .with_button(ButtonId::SignIn, ButtonBinding::command(HoverFeedback::None, MenuCommand::SignIn));

    let sign_up = clip_panel(PanelId::SignUp, "SignUp")
        .with_button(ButtonId::Close, ButtonBinding::switch_to(spin, PanelId::SignIn))
        .with_button(ButtonId::Check, ButtonBinding::command(HoverFeedback::None, MenuCommand::CheckId))
        .with_button(ButtonId::SignUp, ButtonBinding::command(HoverFeedback::None, MenuCommand::SignUp));

    let room_list = clip_panel(PanelId::RoomList, "RoomListAnimation")
        .with_button(ButtonId::Close, ButtonBinding::switch_to(spin, PanelId::SignIn))
        .with_button(ButtonId::CreateRoom, ButtonBinding::switch_to(HoverFeedback::None, PanelId::CreateRoom));

    let create_room = clip_panel(PanelId::CreateRoom, "CreateRoom")
        .with_button(ButtonId::Close, ButtonBinding::switch_to(spin, PanelId::RoomList))
        .with_button(ButtonId::CreateRoom, ButtonBinding::command(HoverFeedback::None, MenuCommand::CreateRoom));

    vec![start, sign_in, sign_up, room_list, create_room]
}
