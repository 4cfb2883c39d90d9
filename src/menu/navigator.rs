//! Menu navigator - the single-active-panel state machine.
//!
//! Switches are requested, never applied on the spot: the outgoing panel
//! finishes its hide before the incoming panel starts its show. The whole
//! machine advances in [`Navigator::tick`], once per frame.

use bevy::prelude::*;
use std::collections::HashMap;

use super::binding::{ButtonBinding, ClickAction, HoverEdge, MenuCommand};
use super::config::{ClipTable, MenuConfig};
use super::error::MenuError;
use super::ids::{ButtonId, PanelId, VisualTarget};
use super::layout;
use super::panel::{Panel, PanelEvent, PanelPhase};
use super::transition::{EffectHandle, TransitionRunner, VisualProps, VisualStore};

fn seed_visual(visuals: &mut VisualStore, target: VisualTarget) {
    if !visuals.contains(target) {
        let props = VisualProps {
            visible: target.starts_visible(),
            ..default()
        };
        visuals.insert(target, props);
    }
}

/// Progress of the switch in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPhase {
    #[default]
    Idle,
    /// Waiting for `from` to finish hiding (and for any collapse effects).
    Hiding { from: PanelId },
    /// Waiting for `to` to finish showing.
    Showing { to: PanelId },
}

/// Result of a button click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Panel was inactive or mid-transition.
    Ignored,
    Switched(PanelId),
    /// External action for the host to carry out.
    Command(MenuCommand),
}

/// Owns the panel registry and the `current` pointer.
#[derive(Resource)]
pub struct Navigator {
    panels: HashMap<PanelId, Panel>,
    current: PanelId,
    phase: SwitchPhase,
    pending_target: Option<PanelId>,
    cascade: Vec<EffectHandle>,
    collapsing: bool,
    runner: TransitionRunner,
    visuals: VisualStore,
    clips: ClipTable,
}

impl Navigator {
    /// Build a navigator over the full panel set.
    pub fn new(panels: impl IntoIterator<Item = Panel>, clips: ClipTable) -> Result<Self, MenuError> {
        let mut registry = HashMap::new();
        for panel in panels {
            let id = panel.id();
            if id == PanelId::None {
                return Err(MenuError::UnknownPanel(id.to_string()));
            }
            if registry.contains_key(&id) {
                return Err(MenuError::DuplicatePanel(id));
            }

            let effects = panel
                .enter_effects()
                .iter()
                .chain(panel.exit_effects())
                .chain(panel.collapse_effects());
            for spec in effects {
                if let Some(clip) = spec.clip_name() {
                    if !clips.contains(clip) {
                        return Err(MenuError::MissingClip {
                            panel: id,
                            clip: clip.to_string(),
                        });
                    }
                }
            }

            registry.insert(id, panel);
        }

        for id in PanelId::SCREENS {
            if !registry.contains_key(&id) {
                return Err(MenuError::MissingPanel(id));
            }
        }
        if registry
            .get(&PanelId::Start)
            .is_some_and(|start| start.collapse_effects().is_empty())
        {
            return Err(MenuError::MissingCascade);
        }

        let mut visuals = VisualStore::default();
        for panel in registry.values() {
            let effect_targets = panel
                .enter_effects()
                .iter()
                .chain(panel.exit_effects())
                .chain(panel.collapse_effects())
                .map(|spec| spec.target);
            for target in panel.targets().into_iter().chain(effect_targets) {
                seed_visual(&mut visuals, target);
            }
        }

        Ok(Self {
            panels: registry,
            current: PanelId::None,
            phase: SwitchPhase::Idle,
            pending_target: None,
            cascade: Vec::new(),
            collapsing: false,
            runner: TransitionRunner::default(),
            visuals,
            clips,
        })
    }

    /// Build the launcher's standard panel set from config.
    pub fn from_config(config: &MenuConfig) -> Result<Self, MenuError> {
        Self::new(layout::launcher_panels(config), config.clips.clone())
    }

    pub fn current(&self) -> PanelId {
        self.current
    }

    pub fn phase(&self) -> SwitchPhase {
        self.phase
    }

    pub fn pending_target(&self) -> Option<PanelId> {
        self.pending_target
    }

    /// No switch and no collapse effects in flight.
    pub fn is_settled(&self) -> bool {
        self.phase == SwitchPhase::Idle && self.cascade.is_empty()
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.get(&id)
    }

    pub fn active_panels(&self) -> Vec<PanelId> {
        let mut active: Vec<PanelId> = self
            .panels
            .values()
            .filter(|panel| panel.is_active())
            .map(Panel::id)
            .collect();
        active.sort_by_key(|id| *id as u8);
        active
    }

    pub fn visuals(&self) -> &VisualStore {
        &self.visuals
    }

    pub fn visuals_mut(&mut self) -> &mut VisualStore {
        &mut self.visuals
    }

    /// Replace the callbacks of a button on a panel.
    pub fn bind_button(
        &mut self,
        panel: PanelId,
        button: ButtonId,
        binding: ButtonBinding,
    ) -> Result<Option<ButtonBinding>, MenuError> {
        let target = binding.hover.target(panel, button);
        let entry = self
            .panels
            .get_mut(&panel)
            .ok_or_else(|| MenuError::UnknownPanel(panel.to_string()))?;
        let previous = entry.bind_button(button, binding);

        for target in [Some(VisualTarget::Button(panel, button)), target].into_iter().flatten() {
            seed_visual(&mut self.visuals, target);
        }
        Ok(previous)
    }

    /// Ask for `target` to become the shown panel.
    ///
    /// A committed hide always runs to completion; a show that has not
    /// settled yet is superseded by the newer request.
    pub fn request_switch(&mut self, target: PanelId) -> Result<(), MenuError> {
        if target != PanelId::None && !self.panels.contains_key(&target) {
            return Err(MenuError::UnknownPanel(target.to_string()));
        }
        debug!("Switch requested: {} -> {} ({:?})", self.current, target, self.phase);

        match self.phase {
            SwitchPhase::Idle => {
                if self.current == PanelId::None {
                    if target != PanelId::None {
                        self.begin_show(target);
                    }
                } else {
                    self.pending_target = Some(target);
                    self.begin_hide(self.current, target);
                }
            }
            SwitchPhase::Hiding { from } => {
                self.pending_target = Some(target);
                if from == PanelId::CreateRoom && target == PanelId::None {
                    self.begin_collapse();
                }
            }
            SwitchPhase::Showing { to } => {
                if target == to {
                    self.pending_target = None;
                } else {
                    self.pending_target = Some(target);
                    self.begin_hide(to, target);
                }
            }
        }
        Ok(())
    }

    /// Pointer entered or left a button.
    ///
    /// Returns whether feedback started; input on a panel that is not
    /// accepting it is ignored.
    pub fn hover(&mut self, panel: PanelId, button: ButtonId, edge: HoverEdge) -> Result<bool, MenuError> {
        let entry = self
            .panels
            .get(&panel)
            .ok_or_else(|| MenuError::UnknownPanel(panel.to_string()))?;
        let binding = entry.binding(button).ok_or(MenuError::UnknownButton { panel, button })?;
        if !entry.accepts_input() {
            return Ok(false);
        }

        let Some(spec) = binding.hover.effect(panel, button, edge) else {
            return Ok(false);
        };
        self.runner.start(&spec, &mut self.visuals, &self.clips);
        Ok(true)
    }

    /// Button clicked.
    pub fn click(&mut self, panel: PanelId, button: ButtonId) -> Result<ClickOutcome, MenuError> {
        let action = {
            let entry = self
                .panels
                .get(&panel)
                .ok_or_else(|| MenuError::UnknownPanel(panel.to_string()))?;
            let binding = entry.binding(button).ok_or(MenuError::UnknownButton { panel, button })?;
            if !entry.accepts_input() {
                debug!("Ignoring click on {:?} while {} is transitioning", button, panel);
                return Ok(ClickOutcome::Ignored);
            }
            binding.on_activate.clone()
        };

        match action {
            ClickAction::SwitchTo(target) => {
                self.request_switch(target)?;
                Ok(ClickOutcome::Switched(target))
            }
            ClickAction::Command(command) => Ok(ClickOutcome::Command(command)),
        }
    }

    /// Advance every effect and the switch in flight by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Vec<PanelEvent> {
        for completion in self.runner.tick(dt, &mut self.visuals) {
            let before = self.cascade.len();
            self.cascade.retain(|handle| *handle != completion.handle);
            if self.cascade.len() != before {
                continue;
            }
            for panel in self.panels.values_mut() {
                if panel.on_completion(&completion) {
                    break;
                }
            }
        }

        let mut events = Vec::new();
        for panel in self.panels.values_mut() {
            events.extend(panel.settle(&mut self.visuals));
        }

        self.advance();
        events
    }

    fn advance(&mut self) {
        match self.phase {
            SwitchPhase::Idle => {}
            SwitchPhase::Hiding { from } => {
                let hidden = self
                    .panels
                    .get(&from)
                    .is_some_and(|panel| panel.phase() == PanelPhase::Hidden);
                if hidden && self.cascade.is_empty() {
                    self.current = PanelId::None;
                    self.collapsing = false;
                    match self.pending_target.take() {
                        Some(target) if target != PanelId::None => self.begin_show(target),
                        _ => self.phase = SwitchPhase::Idle,
                    }
                }
            }
            SwitchPhase::Showing { to } => {
                if self.panels.get(&to).is_some_and(Panel::is_active) {
                    self.current = to;
                    self.phase = SwitchPhase::Idle;
                    info!("Menu settled on {}", to);
                }
            }
        }
    }

    fn begin_show(&mut self, target: PanelId) {
        if let Some(panel) = self.panels.get_mut(&target) {
            panel.show(&mut self.runner, &mut self.visuals, &self.clips);
            self.phase = SwitchPhase::Showing { to: target };
        }
    }

    fn begin_hide(&mut self, from: PanelId, target: PanelId) {
        if let Some(panel) = self.panels.get_mut(&from) {
            panel.hide(&mut self.runner, &mut self.visuals, &self.clips);
        }
        self.current = PanelId::None;
        self.phase = SwitchPhase::Hiding { from };
        if from == PanelId::CreateRoom && target == PanelId::None {
            self.begin_collapse();
        }
    }

    /// Hide the start screen's title and clear the background blur
    /// alongside CreateRoom's own exit.
    fn begin_collapse(&mut self) {
        if self.collapsing {
            return;
        }
        let Some(start) = self.panels.get(&PanelId::Start) else {
            return;
        };
        let specs = start.collapse_effects().to_vec();
        for spec in &specs {
            let handle = self.runner.start(spec, &mut self.visuals, &self.clips);
            self.cascade.push(handle);
        }
        self.collapsing = true;
    }
}
