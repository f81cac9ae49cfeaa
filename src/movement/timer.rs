//! Movement domain: polled countdown timers for timed mechanics.

use bevy::prelude::*;

/// Remainders this small count as zero. Subtracting `1/60` in f32 leaves a
/// few nanoseconds behind on the tick an N-frame timer should run out.
pub const EXPIRY_EPSILON: f32 = 1e-6;

/// Countdown in seconds, decremented once per fixed tick.
///
/// Expiry is observed by polling [`FrameTimer::is_expired`]; there are no
/// callbacks, so the state machine decides when an expiry matters.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimer {
    remaining: f32,
}

impl FrameTimer {
    /// Arm the timer. Non-positive durations leave it expired.
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs.max(0.0);
    }

    pub fn stop(&mut self) {
        self.remaining = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        let next = self.remaining - dt;
        self.remaining = if next <= EXPIRY_EPSILON { 0.0 } else { next };
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn is_active(&self) -> bool {
        !self.is_expired()
    }

    /// Time already spent out of an armed `total`.
    pub fn elapsed_of(&self, total: f32) -> f32 {
        (total - self.remaining).max(0.0)
    }
}
