use fps_launcher::menu::{
    launcher_panels, ButtonBinding, ButtonId, ClickOutcome, ClipTable, HoverEdge, HoverFeedback, MenuCommand,
    MenuConfig, MenuError, Navigator, Panel, PanelEvent, PanelId, PanelPhase, SwitchPhase, VisualTarget,
};

const DT: f32 = 1.0 / 60.0;

fn navigator() -> Navigator {
    Navigator::from_config(&MenuConfig::default()).unwrap()
}

/// Tick until nothing is in flight, checking that no two panels are ever
/// active at once.
fn run_until_settled(nav: &mut Navigator) -> Vec<PanelEvent> {
    let mut events = Vec::new();
    for _ in 0..600 {
        events.extend(nav.tick(DT));
        assert!(nav.active_panels().len() <= 1, "two panels active: {:?}", nav.active_panels());
        if nav.is_settled() {
            return events;
        }
    }
    panic!("navigator never settled ({:?})", nav.phase());
}

/// Tick long enough for hover tweens to land.
fn run_for(nav: &mut Navigator, seconds: f32) {
    let mut elapsed = 0.0;
    while elapsed < seconds {
        nav.tick(DT);
        elapsed += DT;
    }
}

fn open(nav: &mut Navigator, path: &[PanelId]) {
    for id in path {
        nav.request_switch(*id).unwrap();
        run_until_settled(nav);
        assert_eq!(nav.current(), *id);
    }
}

fn props(nav: &Navigator, target: VisualTarget) -> fps_launcher::menu::VisualProps {
    *nav.visuals().get(target).unwrap()
}

#[test]
fn opens_start_from_nothing() {
    let mut nav = navigator();
    assert_eq!(nav.current(), PanelId::None);
    assert!(nav.active_panels().is_empty());

    nav.request_switch(PanelId::Start).unwrap();
    assert_eq!(nav.phase(), SwitchPhase::Showing { to: PanelId::Start });
    assert!(!nav.panel(PanelId::Start).unwrap().is_active());

    let events = run_until_settled(&mut nav);
    assert_eq!(events, vec![PanelEvent::Shown(PanelId::Start)]);
    assert_eq!(nav.current(), PanelId::Start);
    assert_eq!(nav.active_panels(), vec![PanelId::Start]);
    assert!(props(&nav, VisualTarget::Title).visible);
    assert!(props(&nav, VisualTarget::Panel(PanelId::Start)).visible);
}

#[test]
fn outgoing_panel_hides_before_incoming_shows() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start]);

    nav.request_switch(PanelId::SignIn).unwrap();
    assert_eq!(nav.current(), PanelId::None);
    assert_eq!(nav.pending_target(), Some(PanelId::SignIn));
    assert!(nav.panel(PanelId::Start).unwrap().is_disabled());

    nav.tick(DT);
    assert_eq!(nav.panel(PanelId::SignIn).unwrap().phase(), PanelPhase::Hidden);
    assert_eq!(nav.panel(PanelId::Start).unwrap().phase(), PanelPhase::Hiding);

    let events = run_until_settled(&mut nav);
    assert_eq!(
        events,
        vec![PanelEvent::Hidden(PanelId::Start), PanelEvent::Shown(PanelId::SignIn)]
    );
    assert_eq!(nav.current(), PanelId::SignIn);
    assert!(!props(&nav, VisualTarget::Panel(PanelId::Start)).visible);
    assert_eq!(props(&nav, VisualTarget::Blur).blur_radius, MenuConfig::default().blur_radius_max);
}

#[test]
fn newer_request_replaces_pending_target() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start]);

    nav.request_switch(PanelId::SignIn).unwrap();
    nav.tick(DT);
    nav.request_switch(PanelId::SignUp).unwrap();
    assert_eq!(nav.pending_target(), Some(PanelId::SignUp));

    let events = run_until_settled(&mut nav);
    assert!(!events.contains(&PanelEvent::Shown(PanelId::SignIn)));
    assert_eq!(nav.current(), PanelId::SignUp);
    assert_eq!(nav.active_panels(), vec![PanelId::SignUp]);
}

#[test]
fn request_during_show_hides_the_showing_panel() {
    let mut nav = navigator();
    nav.request_switch(PanelId::Start).unwrap();
    nav.tick(DT);

    nav.request_switch(PanelId::SignIn).unwrap();
    assert_eq!(nav.phase(), SwitchPhase::Hiding { from: PanelId::Start });

    let events = run_until_settled(&mut nav);
    assert!(!events.contains(&PanelEvent::Shown(PanelId::Start)));
    assert_eq!(nav.current(), PanelId::SignIn);
    assert_eq!(nav.panel(PanelId::Start).unwrap().phase(), PanelPhase::Hidden);
}

#[test]
fn repeating_the_showing_target_is_a_noop() {
    let mut nav = navigator();
    nav.request_switch(PanelId::Start).unwrap();
    nav.tick(DT);
    nav.request_switch(PanelId::Start).unwrap();

    assert_eq!(nav.phase(), SwitchPhase::Showing { to: PanelId::Start });
    assert_eq!(run_until_settled(&mut nav), vec![PanelEvent::Shown(PanelId::Start)]);
}

#[test]
fn switching_to_the_current_panel_replays_it() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start]);

    nav.request_switch(PanelId::Start).unwrap();
    let events = run_until_settled(&mut nav);
    assert_eq!(
        events,
        vec![PanelEvent::Hidden(PanelId::Start), PanelEvent::Shown(PanelId::Start)]
    );
    assert_eq!(nav.current(), PanelId::Start);
}

#[test]
fn clicks_while_transitioning_are_ignored() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start]);

    nav.request_switch(PanelId::SignIn).unwrap();
    assert_eq!(nav.click(PanelId::Start, ButtonId::Start), Ok(ClickOutcome::Ignored));
    assert_eq!(nav.click(PanelId::SignIn, ButtonId::Close), Ok(ClickOutcome::Ignored));

    run_until_settled(&mut nav);
    assert_eq!(
        nav.click(PanelId::SignIn, ButtonId::Close),
        Ok(ClickOutcome::Switched(PanelId::Start))
    );
}

#[test]
fn commands_are_handed_back_to_the_host() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start, PanelId::SignIn]);

    assert_eq!(
        nav.click(PanelId::SignIn, ButtonId::SignIn),
        Ok(ClickOutcome::Command(MenuCommand::SignIn))
    );
    assert!(nav.is_settled());
    assert_eq!(nav.current(), PanelId::SignIn);
}

#[test]
fn hover_pulses_and_hide_restores_baseline() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start]);
    let button = VisualTarget::Button(PanelId::Start, ButtonId::Start);

    assert_eq!(nav.hover(PanelId::Start, ButtonId::Start, HoverEdge::Enter), Ok(true));
    nav.tick(DT);
    let mid = props(&nav, button).scale;
    assert!(mid > 1.0 && mid < 1.2);
    run_for(&mut nav, 0.5);
    assert_eq!(props(&nav, button).scale, 1.2);

    assert_eq!(nav.click(PanelId::Start, ButtonId::Start), Ok(ClickOutcome::Switched(PanelId::SignIn)));
    run_until_settled(&mut nav);
    assert_eq!(props(&nav, button).scale, 1.0);

    assert_eq!(nav.click(PanelId::SignIn, ButtonId::Close), Ok(ClickOutcome::Switched(PanelId::Start)));
    run_until_settled(&mut nav);
    assert_eq!(nav.current(), PanelId::Start);
    assert_eq!(props(&nav, button).scale, 1.0);
}

#[test]
fn close_icon_spins_on_hover() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start, PanelId::SignIn]);
    let icon = VisualTarget::CloseIcon(PanelId::SignIn);

    assert_eq!(nav.hover(PanelId::SignIn, ButtonId::Close, HoverEdge::Enter), Ok(true));
    run_for(&mut nav, 0.5);
    assert_eq!(props(&nav, icon).rotation, MenuConfig::default().close_spin_degrees);

    assert_eq!(nav.hover(PanelId::SignIn, ButtonId::Close, HoverEdge::Exit), Ok(true));
    run_for(&mut nav, 0.5);
    assert_eq!(props(&nav, icon).rotation, 0.0);
}

#[test]
fn hover_is_ignored_on_inactive_panels_and_plain_buttons() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start]);

    assert_eq!(nav.hover(PanelId::SignIn, ButtonId::Close, HoverEdge::Enter), Ok(false));
    open(&mut nav, &[PanelId::SignIn]);
    assert_eq!(nav.hover(PanelId::SignIn, ButtonId::SignIn, HoverEdge::Enter), Ok(false));
}

#[test]
fn create_room_to_none_collapses_title_and_blur() {
    let config = MenuConfig::default();
    let mut nav = navigator();
    open(
        &mut nav,
        &[PanelId::Start, PanelId::SignIn, PanelId::RoomList, PanelId::CreateRoom],
    );
    assert!(props(&nav, VisualTarget::Title).visible);
    assert_eq!(props(&nav, VisualTarget::Blur).blur_radius, config.blur_radius_max);

    nav.request_switch(PanelId::None).unwrap();
    let events = run_until_settled(&mut nav);

    assert_eq!(events, vec![PanelEvent::Hidden(PanelId::CreateRoom)]);
    assert_eq!(nav.current(), PanelId::None);
    assert!(nav.active_panels().is_empty());
    assert!(!props(&nav, VisualTarget::Title).visible);
    assert_eq!(props(&nav, VisualTarget::Blur).blur_radius, config.blur_radius_clear);
    assert!(!props(&nav, VisualTarget::Blur).visible);
}

#[test]
fn none_request_during_create_room_hide_still_collapses() {
    let mut nav = navigator();
    open(
        &mut nav,
        &[PanelId::Start, PanelId::SignIn, PanelId::RoomList, PanelId::CreateRoom],
    );

    nav.request_switch(PanelId::RoomList).unwrap();
    nav.tick(DT);
    nav.request_switch(PanelId::None).unwrap();
    run_until_settled(&mut nav);

    assert_eq!(nav.current(), PanelId::None);
    assert_eq!(nav.panel(PanelId::RoomList).unwrap().phase(), PanelPhase::Hidden);
    assert!(!props(&nav, VisualTarget::Title).visible);
}

#[test]
fn leaving_other_panels_for_none_keeps_the_title() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start, PanelId::SignIn, PanelId::RoomList]);

    nav.request_switch(PanelId::None).unwrap();
    run_until_settled(&mut nav);

    assert_eq!(nav.current(), PanelId::None);
    assert!(props(&nav, VisualTarget::Title).visible);
}

#[test]
fn start_reopens_after_collapse() {
    let mut nav = navigator();
    open(
        &mut nav,
        &[PanelId::Start, PanelId::SignIn, PanelId::RoomList, PanelId::CreateRoom, PanelId::None],
    );

    open(&mut nav, &[PanelId::Start]);
    assert!(props(&nav, VisualTarget::Title).visible);
    assert_eq!(props(&nav, VisualTarget::Title).opacity, 1.0);
    assert_eq!(nav.active_panels(), vec![PanelId::Start]);
}

#[test]
fn rebinding_a_button_changes_its_click() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start]);

    let previous = nav
        .bind_button(
            PanelId::Start,
            ButtonId::Close,
            ButtonBinding::switch_to(HoverFeedback::None, PanelId::SignUp),
        )
        .unwrap();
    assert!(previous.is_some());
    assert_eq!(
        nav.click(PanelId::Start, ButtonId::Close),
        Ok(ClickOutcome::Switched(PanelId::SignUp))
    );
}

#[test]
fn unknown_buttons_are_errors() {
    let mut nav = navigator();
    assert_eq!(
        nav.click(PanelId::SignIn, ButtonId::Start),
        Err(MenuError::UnknownButton {
            panel: PanelId::SignIn,
            button: ButtonId::Start,
        })
    );
}

#[test]
fn construction_rejects_incomplete_panel_sets() {
    let config = MenuConfig::default();

    let missing: Vec<Panel> = launcher_panels(&config)
        .into_iter()
        .filter(|panel| panel.id() != PanelId::CreateRoom)
        .collect();
    assert_eq!(
        Navigator::new(missing, config.clips.clone()).err(),
        Some(MenuError::MissingPanel(PanelId::CreateRoom))
    );

    let mut doubled = launcher_panels(&config);
    doubled.push(Panel::new(PanelId::SignIn));
    assert_eq!(
        Navigator::new(doubled, config.clips.clone()).err(),
        Some(MenuError::DuplicatePanel(PanelId::SignIn))
    );

    let err = Navigator::new(launcher_panels(&config), ClipTable::default()).err();
    assert!(matches!(err, Some(MenuError::MissingClip { .. })));
}

#[test]
fn interrupted_start_show_leaves_title_fully_shown() {
    let mut nav = navigator();
    nav.request_switch(PanelId::Start).unwrap();
    for _ in 0..6 {
        nav.tick(DT);
    }

    nav.request_switch(PanelId::SignIn).unwrap();
    run_until_settled(&mut nav);

    assert_eq!(nav.current(), PanelId::SignIn);
    let title = props(&nav, VisualTarget::Title);
    assert!(title.visible);
    assert_eq!(title.opacity, 1.0);
}

#[test]
fn interrupted_show_fades_out_from_where_it_was() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start, PanelId::SignIn]);
    let root = VisualTarget::Panel(PanelId::SignUp);

    nav.request_switch(PanelId::SignUp).unwrap();
    while nav.panel(PanelId::SignUp).unwrap().phase() != PanelPhase::Showing {
        nav.tick(DT);
    }
    for _ in 0..3 {
        nav.tick(DT);
    }
    let partial = props(&nav, root).opacity;
    assert!(partial > 0.0 && partial < 1.0);

    nav.request_switch(PanelId::SignIn).unwrap();
    assert_eq!(props(&nav, root).opacity, partial);
    nav.tick(DT);
    assert!(props(&nav, root).opacity < partial);

    run_until_settled(&mut nav);
    assert_eq!(nav.current(), PanelId::SignIn);
}

#[test]
fn hiding_resets_a_spun_close_icon() {
    let mut nav = navigator();
    open(&mut nav, &[PanelId::Start, PanelId::SignIn]);
    let icon = VisualTarget::CloseIcon(PanelId::SignIn);

    assert_eq!(nav.hover(PanelId::SignIn, ButtonId::Close, HoverEdge::Enter), Ok(true));
    run_for(&mut nav, 0.5);
    assert_eq!(props(&nav, icon).rotation, MenuConfig::default().close_spin_degrees);

    assert_eq!(nav.click(PanelId::SignIn, ButtonId::Close), Ok(ClickOutcome::Switched(PanelId::Start)));
    run_until_settled(&mut nav);

    assert_eq!(nav.current(), PanelId::Start);
    assert_eq!(props(&nav, icon).rotation, 0.0);
    assert!(!nav.panel(PanelId::SignIn).unwrap().is_active());
}
