//! A menu panel: its buttons and show/hide choreography.

use bevy::prelude::*;
use std::collections::HashMap;

use super::binding::ButtonBinding;
use super::config::ClipTable;
use super::ids::{ButtonId, PanelId, VisualTarget};
use super::transition::{Completion, EffectHandle, EffectSpec, TransitionRunner, VisualStore};

/// Where a panel is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Hidden,
    Showing,
    Shown,
    Hiding,
}

/// Reported when a panel's show or hide join-barrier resolves.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Shown(PanelId),
    Hidden(PanelId),
}

/// One menu screen.
///
/// `is_active` is true only between a completed show and the start of the
/// next hide. `disabled` (clicks and hovers ignored) goes up when a hide
/// starts and comes down only when the next show completes.
#[derive(Debug, Clone)]
pub struct Panel {
    id: PanelId,
    buttons: HashMap<ButtonId, ButtonBinding>,
    enter: Vec<EffectSpec>,
    exit: Vec<EffectSpec>,
    collapse: Vec<EffectSpec>,
    phase: PanelPhase,
    pending: Vec<EffectHandle>,
    is_active: bool,
    disabled: bool,
}

impl Panel {
    pub fn new(id: PanelId) -> Self {
        Self {
            id,
            buttons: HashMap::new(),
            enter: Vec::new(),
            exit: Vec::new(),
            collapse: Vec::new(),
            phase: PanelPhase::Hidden,
            pending: Vec::new(),
            is_active: false,
            disabled: false,
        }
    }

    pub fn with_enter(mut self, effects: impl IntoIterator<Item = EffectSpec>) -> Self {
        self.enter.extend(effects);
        self
    }

    pub fn with_exit(mut self, effects: impl IntoIterator<Item = EffectSpec>) -> Self {
        self.exit.extend(effects);
        self
    }

    /// Effects another panel's exit can borrow to collapse this one's
    /// shared decorations (title, background blur).
    pub fn with_collapse(mut self, effects: impl IntoIterator<Item = EffectSpec>) -> Self {
        self.collapse.extend(effects);
        self
    }

    pub fn with_button(mut self, button: ButtonId, binding: ButtonBinding) -> Self {
        self.bind_button(button, binding);
        self
    }

    /// Register the callbacks of a button, replacing any earlier binding.
    pub fn bind_button(&mut self, button: ButtonId, binding: ButtonBinding) -> Option<ButtonBinding> {
        self.buttons.insert(button, binding)
    }

    pub fn binding(&self, button: ButtonId) -> Option<&ButtonBinding> {
        self.buttons.get(&button)
    }

    pub fn buttons(&self) -> impl Iterator<Item = (&ButtonId, &ButtonBinding)> {
        self.buttons.iter()
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Accepts pointer input: shown, not mid-transition.
    pub fn accepts_input(&self) -> bool {
        self.is_active && !self.disabled
    }

    pub fn enter_effects(&self) -> &[EffectSpec] {
        &self.enter
    }

    pub fn exit_effects(&self) -> &[EffectSpec] {
        &self.exit
    }

    pub fn collapse_effects(&self) -> &[EffectSpec] {
        &self.collapse
    }

    /// Every visual target this panel owns.
    pub fn targets(&self) -> Vec<VisualTarget> {
        let mut targets = vec![VisualTarget::Panel(self.id)];
        for (button, binding) in &self.buttons {
            targets.push(VisualTarget::Button(self.id, *button));
            if let Some(target) = binding.hover.target(self.id, *button) {
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
        }
        targets
    }

    /// Launch the enter choreography. No-op if already shown or showing.
    pub fn show(&mut self, runner: &mut TransitionRunner, visuals: &mut VisualStore, clips: &ClipTable) -> bool {
        if matches!(self.phase, PanelPhase::Showing | PanelPhase::Shown) {
            return false;
        }

        self.cancel_pending(runner);
        if let Some(root) = visuals.get_mut(VisualTarget::Panel(self.id)) {
            root.visible = true;
        }
        self.pending = self.enter.iter().map(|spec| runner.start(spec, visuals, clips)).collect();
        self.phase = PanelPhase::Showing;
        true
    }

    /// Launch the exit choreography. No-op if already hidden or hiding.
    pub fn hide(&mut self, runner: &mut TransitionRunner, visuals: &mut VisualStore, clips: &ClipTable) -> bool {
        if matches!(self.phase, PanelPhase::Hidden | PanelPhase::Hiding) {
            return false;
        }

        // Enter effects on targets the exit leaves alone land on their end
        // value; the rest are cut off and taken over by the exit.
        for handle in self.pending.drain(..) {
            if self.exit.iter().any(|spec| spec.target == handle.target) {
                runner.cancel(handle);
            } else {
                runner.finish(handle, visuals);
            }
        }
        for (button, binding) in &self.buttons {
            if let Some(target) = binding.hover.target(self.id, *button) {
                runner.cancel_target(target);
            }
        }

        self.is_active = false;
        self.disabled = true;
        self.pending = self.exit.iter().map(|spec| runner.start(spec, visuals, clips)).collect();
        self.phase = PanelPhase::Hiding;
        true
    }

    /// Release the join-barrier slot of a finished effect.
    ///
    /// Returns whether the effect belonged to this panel.
    pub fn on_completion(&mut self, completion: &Completion) -> bool {
        let before = self.pending.len();
        self.pending.retain(|handle| *handle != completion.handle);
        self.pending.len() != before
    }

    /// Resolve a show or hide whose effects have all finished.
    pub fn settle(&mut self, visuals: &mut VisualStore) -> Option<PanelEvent> {
        if !self.pending.is_empty() {
            return None;
        }

        match self.phase {
            PanelPhase::Showing => {
                self.phase = PanelPhase::Shown;
                self.is_active = true;
                self.disabled = false;
                Some(PanelEvent::Shown(self.id))
            }
            PanelPhase::Hiding => {
                self.phase = PanelPhase::Hidden;
                self.reset_visuals(visuals);
                Some(PanelEvent::Hidden(self.id))
            }
            PanelPhase::Hidden | PanelPhase::Shown => None,
        }
    }

    fn reset_visuals(&self, visuals: &mut VisualStore) {
        if let Some(root) = visuals.get_mut(VisualTarget::Panel(self.id)) {
            root.visible = false;
        }
        for button in self.buttons.keys() {
            if let Some(props) = visuals.get_mut(VisualTarget::Button(self.id, *button)) {
                props.scale = 1.0;
            }
        }
        if let Some(icon) = visuals.get_mut(VisualTarget::CloseIcon(self.id)) {
            icon.rotation = 0.0;
        }
    }

    fn cancel_pending(&mut self, runner: &mut TransitionRunner) {
        for handle in self.pending.drain(..) {
            runner.cancel(handle);
        }
    }
}
