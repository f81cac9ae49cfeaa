//! Movement domain: fixed-duration dash bursts.

use bevy::prelude::*;

use crate::movement::config::LocomotionConfig;
use crate::movement::controller::{LocomotionController, LocomotionInput, TickClock};

/// Dash heading for the held directions, or `None` when nothing (or only
/// opposing directions) is held. Diagonals are normalized.
pub fn dash_direction(input: &LocomotionInput) -> Option<Vec2> {
    let direction = input.direction().normalize_or_zero();
    (direction != Vec2::ZERO).then_some(direction)
}

impl LocomotionController {
    /// Start a dash if requested and possible, and hold an active burst.
    pub(crate) fn update_dash(
        &mut self,
        config: &LocomotionConfig,
        input: &LocomotionInput,
        clock: &TickClock,
    ) {
        if self.dash.is_active() {
            self.velocity = self.dash_velocity;
            return;
        }
        if !input.dash_pressed || self.dashes_remaining == 0 {
            return;
        }
        let Some(direction) = dash_direction(input) else {
            return;
        };

        self.dash.start(clock.secs(config.dash_time));
        self.cancel_jump();
        self.dashes_remaining -= 1;
        self.dash_velocity = direction * config.dash_velocity;
        self.velocity = self.dash_velocity;
        self.dashing = true;
        debug!(
            "Dash: direction={:?}, dashes_remaining={}",
            direction, self.dashes_remaining
        );
    }

    /// Slow down once, on the tick the dash timer runs out.
    pub(crate) fn finish_dash(&mut self, config: &LocomotionConfig) {
        if self.dashing && self.dash.is_expired() {
            self.dashing = false;
            self.velocity *= config.dash_end_ratio;
            debug!("Dash ended: velocity={:?}", self.velocity);
        }
    }
}
