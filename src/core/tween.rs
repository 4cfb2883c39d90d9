//! Normalized scalar tweening shared by menu effects.

/// Linear interpolation from one scalar to another over normalized progress.
///
/// Progress advances by `dt * rate` per step and is clamped to `1.0`. Once
/// finished, [`Tween::value`] returns exactly `to` so no interpolation drift
/// survives the last step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    /// Normalized progress gained per second (higher = faster)
    pub rate: f32,
    progress: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, rate: f32) -> Self {
        Self {
            from,
            to,
            rate,
            progress: 0.0,
        }
    }

    /// Tween that finishes after `duration` seconds.
    ///
    /// A non-positive duration finishes on the first step.
    pub fn over(from: f32, to: f32, duration: f32) -> Self {
        let rate = if duration > 0.0 { 1.0 / duration } else { f32::INFINITY };
        Self::new(from, to, rate)
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.rate.is_finite() {
            self.progress = (self.progress + dt.max(0.0) * self.rate).min(1.0);
        } else {
            self.progress = 1.0;
        }
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            self.to
        } else {
            self.from + (self.to - self.from) * self.progress
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }
}
