//! Transition runner - time-bounded visual effects with per-target slots.
//!
//! Effects are advanced once per frame by [`TransitionRunner::tick`]. Each
//! visual target has at most one running effect; starting another on the
//! same target supersedes the old one, which is reported as cancelled.

use bevy::prelude::*;
use std::collections::HashMap;

use super::config::ClipTable;
use super::ids::VisualTarget;
use crate::core::Tween;

/// Engine-facing visual state of one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualProps {
    pub scale: f32,
    /// Rotation about the view axis, in degrees
    pub rotation: f32,
    pub blur_radius: f32,
    pub opacity: f32,
    pub visible: bool,
}

impl Default for VisualProps {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            blur_radius: 1.0,
            opacity: 1.0,
            visible: false,
        }
    }
}

impl VisualProps {
    fn get(&self, property: Property) -> f32 {
        match property {
            Property::Scale => self.scale,
            Property::Rotation => self.rotation,
            Property::BlurRadius => self.blur_radius,
            Property::Opacity => self.opacity,
        }
    }

    fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Scale => self.scale = value,
            Property::Rotation => self.rotation = value,
            Property::BlurRadius => self.blur_radius = value,
            Property::Opacity => self.opacity = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Property {
    Scale,
    Rotation,
    BlurRadius,
    Opacity,
}

/// Visual state for every target the menu knows about.
///
/// The host mirrors this into scene objects. A target that has been removed
/// no longer exists as far as running effects are concerned.
#[derive(Debug, Clone, Default)]
pub struct VisualStore {
    props: HashMap<VisualTarget, VisualProps>,
}

impl VisualStore {
    pub fn insert(&mut self, target: VisualTarget, props: VisualProps) {
        self.props.insert(target, props);
    }

    pub fn remove(&mut self, target: VisualTarget) -> Option<VisualProps> {
        self.props.remove(&target)
    }

    pub fn get(&self, target: VisualTarget) -> Option<&VisualProps> {
        self.props.get(&target)
    }

    pub fn get_mut(&mut self, target: VisualTarget) -> Option<&mut VisualProps> {
        self.props.get_mut(&target)
    }

    pub fn contains(&self, target: VisualTarget) -> bool {
        self.props.contains_key(&target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VisualTarget, &VisualProps)> {
        self.props.iter()
    }
}

/// What an effect does to its target.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    Scale { to: f32, rate: f32 },
    Spin { to: f32, rate: f32 },
    Blur { to: f32, rate: f32 },
    /// Named clip; timing comes from the clip table
    Clip { name: String },
}

/// One effect to run on one target.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSpec {
    pub target: VisualTarget,
    pub kind: EffectKind,
    /// Make the target visible when the effect starts
    pub reveal: bool,
    /// Hide the target when the effect completes
    pub conceal: bool,
}

impl EffectSpec {
    fn new(target: VisualTarget, kind: EffectKind) -> Self {
        Self {
            target,
            kind,
            reveal: false,
            conceal: false,
        }
    }

    pub fn scale(target: VisualTarget, to: f32, rate: f32) -> Self {
        Self::new(target, EffectKind::Scale { to, rate })
    }

    pub fn spin(target: VisualTarget, to: f32, rate: f32) -> Self {
        Self::new(target, EffectKind::Spin { to, rate })
    }

    pub fn blur(target: VisualTarget, to: f32, rate: f32) -> Self {
        Self::new(target, EffectKind::Blur { to, rate })
    }

    pub fn clip(target: VisualTarget, name: impl Into<String>) -> Self {
        Self::new(target, EffectKind::Clip { name: name.into() })
    }

    pub fn revealing(mut self) -> Self {
        self.reveal = true;
        self
    }

    pub fn concealing(mut self) -> Self {
        self.conceal = true;
        self
    }

    /// Clip name, if this is clip playback.
    pub fn clip_name(&self) -> Option<&str> {
        match &self.kind {
            EffectKind::Clip { name } => Some(name),
            _ => None,
        }
    }
}

/// Identifies one started effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle {
    id: u64,
    pub target: VisualTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// Final report for one effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub handle: EffectHandle,
    pub outcome: Outcome,
}

struct Running {
    handle: EffectHandle,
    property: Property,
    tween: Tween,
    conceal: bool,
}

/// Runs effects cooperatively, one slot per target.
#[derive(Default)]
pub struct TransitionRunner {
    next_id: u64,
    running: HashMap<VisualTarget, Running>,
    finished: Vec<Completion>,
}

impl TransitionRunner {
    /// Start an effect, superseding whatever is running on its target.
    pub fn start(&mut self, spec: &EffectSpec, visuals: &mut VisualStore, clips: &ClipTable) -> EffectHandle {
        self.next_id += 1;
        let handle = EffectHandle {
            id: self.next_id,
            target: spec.target,
        };

        let current = visuals.get(spec.target).copied().unwrap_or_default();
        let (property, tween) = match &spec.kind {
            EffectKind::Scale { to, rate } => (Property::Scale, Tween::new(current.scale, *to, *rate)),
            EffectKind::Spin { to, rate } => (Property::Rotation, Tween::new(current.rotation, *to, *rate)),
            EffectKind::Blur { to, rate } => (Property::BlurRadius, Tween::new(current.blur_radius, *to, *rate)),
            EffectKind::Clip { name } => match clips.get(name) {
                Some(clip) => {
                    // A target already on screen fades from where it is.
                    let from = if current.visible { current.opacity } else { clip.opacity.0 };
                    (Property::Opacity, Tween::over(from, clip.opacity.1, clip.duration))
                }
                None => {
                    warn!("Clip '{}' not found, finishing immediately", name);
                    (Property::Opacity, Tween::over(current.opacity, current.opacity, 0.0))
                }
            },
        };

        if let Some(props) = visuals.get_mut(spec.target) {
            if spec.reveal {
                props.visible = true;
            }
            props.set(property, tween.from);
        }

        let running = Running {
            handle,
            property,
            tween,
            conceal: spec.conceal,
        };
        if let Some(old) = self.running.insert(spec.target, running) {
            self.finished.push(Completion {
                handle: old.handle,
                outcome: Outcome::Cancelled,
            });
        }

        handle
    }

    /// Stop an effect if it is still the one running on its target.
    pub fn cancel(&mut self, handle: EffectHandle) {
        if self.is_running(handle) {
            self.cancel_target(handle.target);
        }
    }

    /// Stop whatever is running on a target.
    pub fn cancel_target(&mut self, target: VisualTarget) {
        if let Some(old) = self.running.remove(&target) {
            self.finished.push(Completion {
                handle: old.handle,
                outcome: Outcome::Cancelled,
            });
        }
    }

    /// Jump an effect straight to its end value and report it completed.
    pub fn finish(&mut self, handle: EffectHandle, visuals: &mut VisualStore) {
        if !self.is_running(handle) {
            return;
        }
        let Some(running) = self.running.remove(&handle.target) else {
            return;
        };
        if let Some(props) = visuals.get_mut(handle.target) {
            props.set(running.property, running.tween.to);
            if running.conceal {
                props.visible = false;
            }
        }
        self.finished.push(Completion {
            handle,
            outcome: Outcome::Completed,
        });
    }

    pub fn is_running(&self, handle: EffectHandle) -> bool {
        self.running
            .get(&handle.target)
            .is_some_and(|running| running.handle == handle)
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    /// Advance every running effect by `dt` seconds.
    ///
    /// Returns completions and cancellations since the previous tick.
    pub fn tick(&mut self, dt: f32, visuals: &mut VisualStore) -> Vec<Completion> {
        let mut done = std::mem::take(&mut self.finished);

        self.running.retain(|target, running| {
            let Some(props) = visuals.get_mut(*target) else {
                done.push(Completion {
                    handle: running.handle,
                    outcome: Outcome::Cancelled,
                });
                return false;
            };

            let value = running.tween.advance(dt);
            props.set(running.property, value);

            if running.tween.is_finished() {
                if running.conceal {
                    props.visible = false;
                }
                done.push(Completion {
                    handle: running.handle,
                    outcome: Outcome::Completed,
                });
                false
            } else {
                true
            }
        });

        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::ids::{ButtonId, PanelId};
    use crate::menu::ClipDef;

    const BUTTON: VisualTarget = VisualTarget::Button(PanelId::Start, ButtonId::Start);

    fn store() -> VisualStore {
        let mut visuals = VisualStore::default();
        visuals.insert(BUTTON, VisualProps::default());
        visuals.insert(VisualTarget::Panel(PanelId::SignIn), VisualProps::default());
        visuals
    }

    #[test]
    fn scale_reaches_exact_target() {
        let mut visuals = store();
        let mut runner = TransitionRunner::default();
        let handle = runner.start(&EffectSpec::scale(BUTTON, 1.2, 10.0), &mut visuals, &ClipTable::default());

        let mut completions = Vec::new();
        for _ in 0..20 {
            completions.extend(runner.tick(0.016, &mut visuals));
        }

        assert_eq!(completions, vec![Completion { handle, outcome: Outcome::Completed }]);
        assert_eq!(visuals.get(BUTTON).unwrap().scale, 1.2);
        assert!(!runner.is_running(handle));
    }

    #[test]
    fn newer_effect_supersedes_older_one() {
        let mut visuals = store();
        let mut runner = TransitionRunner::default();
        let clips = ClipTable::default();

        let enter = runner.start(&EffectSpec::scale(BUTTON, 1.2, 10.0), &mut visuals, &clips);
        runner.tick(0.03, &mut visuals);
        let exit = runner.start(&EffectSpec::scale(BUTTON, 1.0, 10.0), &mut visuals, &clips);

        assert_eq!(runner.running_count(), 1);
        let completions = runner.tick(0.03, &mut visuals);
        assert!(completions.contains(&Completion { handle: enter, outcome: Outcome::Cancelled }));
        assert!(runner.is_running(exit));

        for _ in 0..10 {
            runner.tick(0.03, &mut visuals);
        }
        assert_eq!(visuals.get(BUTTON).unwrap().scale, 1.0);
    }

    #[test]
    fn clip_uses_table_duration_and_visibility_flags() {
        let mut visuals = store();
        let mut runner = TransitionRunner::default();
        let clips: ClipTable = [("OnEnable_SignIn", ClipDef::new(0.5, (0.0, 1.0)))].into_iter().collect();
        let target = VisualTarget::Panel(PanelId::SignIn);

        runner.start(&EffectSpec::clip(target, "OnEnable_SignIn").revealing(), &mut visuals, &clips);
        assert!(visuals.get(target).unwrap().visible);
        assert_eq!(visuals.get(target).unwrap().opacity, 0.0);

        assert!(runner.tick(0.3, &mut visuals).is_empty());
        assert_eq!(runner.tick(0.3, &mut visuals).len(), 1);
        assert_eq!(visuals.get(target).unwrap().opacity, 1.0);

        runner.start(&EffectSpec::clip(target, "OnEnable_SignIn").concealing(), &mut visuals, &clips);
        runner.tick(1.0, &mut visuals);
        assert!(!visuals.get(target).unwrap().visible);
    }

    #[test]
    fn clip_on_visible_target_fades_from_current_opacity() {
        let mut visuals = store();
        let mut runner = TransitionRunner::default();
        let clips: ClipTable = [
            ("OnEnable_SignIn", ClipDef::new(0.5, (0.0, 1.0))),
            ("OnDisable_SignIn", ClipDef::new(0.5, (1.0, 0.0))),
        ]
        .into_iter()
        .collect();
        let target = VisualTarget::Panel(PanelId::SignIn);

        runner.start(&EffectSpec::clip(target, "OnEnable_SignIn").revealing(), &mut visuals, &clips);
        runner.tick(0.1, &mut visuals);
        let partial = visuals.get(target).unwrap().opacity;
        assert!(partial > 0.0 && partial < 1.0);

        runner.start(&EffectSpec::clip(target, "OnDisable_SignIn").concealing(), &mut visuals, &clips);
        assert_eq!(visuals.get(target).unwrap().opacity, partial);
        runner.tick(0.1, &mut visuals);
        assert!(visuals.get(target).unwrap().opacity < partial);
    }

    #[test]
    fn finish_lands_on_end_value() {
        let mut visuals = store();
        let mut runner = TransitionRunner::default();
        let handle = runner.start(&EffectSpec::scale(BUTTON, 1.2, 10.0), &mut visuals, &ClipTable::default());
        runner.tick(0.016, &mut visuals);

        runner.finish(handle, &mut visuals);

        assert_eq!(visuals.get(BUTTON).unwrap().scale, 1.2);
        assert!(!runner.is_running(handle));
        assert_eq!(
            runner.tick(0.016, &mut visuals),
            vec![Completion { handle, outcome: Outcome::Completed }]
        );
    }

    #[test]
    fn missing_target_terminates_silently() {
        let mut visuals = store();
        let mut runner = TransitionRunner::default();
        let handle = runner.start(&EffectSpec::spin(BUTTON, 90.0, 10.0), &mut visuals, &ClipTable::default());

        visuals.remove(BUTTON);
        let completions = runner.tick(0.016, &mut visuals);

        assert_eq!(completions, vec![Completion { handle, outcome: Outcome::Cancelled }]);
        assert_eq!(runner.running_count(), 0);
    }

    #[test]
    fn cancel_ignores_stale_handles() {
        let mut visuals = store();
        let mut runner = TransitionRunner::default();
        let clips = ClipTable::default();

        let old = runner.start(&EffectSpec::scale(BUTTON, 1.2, 10.0), &mut visuals, &clips);
        let new = runner.start(&EffectSpec::scale(BUTTON, 1.0, 10.0), &mut visuals, &clips);
        runner.cancel(old);

        assert!(runner.is_running(new));
    }
}
