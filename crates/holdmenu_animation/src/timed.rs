//! Fixed-duration eased tracks
//!
//! Drives the press-feedback pulse and the exit transitions. A track with a
//! delay holds its starting value until the delay elapses; a zero-duration
//! track jumps to its target the moment the delay is over (used for the
//! opacity handoff between the held element and the overlay).

use crate::easing::Easing;

/// A single eased transition from one value to another
#[derive(Clone, Copy, Debug)]
pub struct TimedTrack {
    from: f32,
    to: f32,
    easing: Easing,
    duration_ms: f32,
    delay_ms: f32,
    elapsed_ms: f32,
}

impl TimedTrack {
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            easing,
            duration_ms: duration_ms as f32,
            delay_ms: 0.0,
            elapsed_ms: 0.0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms as f32;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance by `dt_ms` milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed_ms += dt_ms;
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.delay_ms + self.duration_ms
    }

    /// Current value; the starting value while the delay runs
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let active_ms = self.elapsed_ms - self.delay_ms;
        if active_ms <= 0.0 {
            return self.from;
        }
        if active_ms >= self.duration_ms {
            return self.to;
        }
        let progress = self.easing.apply(active_ms / self.duration_ms);
        self.from + (self.to - self.from) * progress
    }
}
