//! Movement domain: jump kinematics (variable height, apex hang, bunny hop).

use bevy::prelude::*;

use crate::movement::config::LocomotionConfig;
use crate::movement::controller::{LocomotionController, LocomotionInput, LocomotionState, TickClock};

/// Jump sub-state, only meaningful while airborne.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    NotJumping,
    Ascending,
    /// Near the apex with reduced effective gravity.
    Hanging,
}

/// Upward speed left after releasing jump `elapsed` seconds into the hold.
///
/// The height already covered is estimated from the theoretical full-jump
/// launch speed, not the body's actual speed, so an ascent bent by outside
/// forces gives an approximate target.
pub fn variable_jump_speed(gravity: f32, max_height: f32, max_hold: f32, elapsed: f32) -> f32 {
    if max_hold <= 0.0 {
        return 0.0;
    }
    let launch = (2.0 * gravity * max_height).max(0.0).sqrt();
    let covered = launch * elapsed - 0.5 * gravity * elapsed * elapsed;
    let target = max_height * (elapsed / max_hold);
    let remaining = (target - covered).max(0.0);
    (2.0 * gravity * remaining).sqrt()
}

impl LocomotionController {
    /// Launch a jump. A bunny hop boosts the pre-jump horizontal speed.
    pub(crate) fn start_jump(&mut self, config: &LocomotionConfig, bhop: bool, clock: &TickClock) {
        self.jump_buffer.stop();
        self.jump_hang.stop();
        self.jump_hold.start(clock.secs(config.max_jump_hold_time));
        if bhop {
            self.velocity.x *= config.bhop_boost;
        }
        self.velocity.y = config.jump_velocity();
        self.jump = JumpState::Ascending;
        debug!(
            "Jump: from={:?} bhop={} vy={}",
            self.locomotion, bhop, self.velocity.y
        );
    }

    /// Drop any jump sub-state and its timers.
    pub(crate) fn cancel_jump(&mut self) {
        self.jump_hold.stop();
        self.jump_hang.stop();
        self.jump = JumpState::NotJumping;
    }

    /// Gravity plus the Ascending / Hanging transitions for this tick.
    pub(crate) fn update_jump(
        &mut self,
        config: &LocomotionConfig,
        input: &LocomotionInput,
        on_floor: bool,
        pushed_down: bool,
        launched: bool,
        clock: &TickClock,
    ) {
        let dt = clock.delta;
        if self.locomotion != LocomotionState::Grounded && !self.dash.is_active() {
            self.velocity.y -= config.gravity * dt;
        }
        // The floor and push signals still describe the pre-launch tick.
        if launched {
            return;
        }

        match self.jump {
            JumpState::NotJumping => {}
            JumpState::Ascending => {
                if on_floor || pushed_down {
                    debug!("Jump ended while ascending: landed={} pushed={}", on_floor, pushed_down);
                    self.cancel_jump();
                } else if input.jump_released && self.jump_hold.is_active() {
                    self.release_jump(config, clock);
                } else if self.velocity.y <= 0.0 {
                    self.enter_hang(config, clock);
                }
            }
            JumpState::Hanging => {
                if on_floor || pushed_down || self.jump_hang.is_expired() {
                    debug!("Hang ended: landed={} pushed={}", on_floor, pushed_down);
                    self.cancel_jump();
                } else {
                    self.velocity.y += config.hang_smoothing * dt;
                }
            }
        }
    }

    /// Early release truncates the ascent toward a height proportional to
    /// how long jump was held.
    fn release_jump(&mut self, config: &LocomotionConfig, clock: &TickClock) {
        let max_hold = clock.secs(config.max_jump_hold_time);
        let elapsed = self.jump_hold.elapsed_of(max_hold);
        self.jump_hold.stop();

        let speed = variable_jump_speed(config.gravity, config.max_jump_height, max_hold, elapsed);
        if speed <= 0.0 {
            self.enter_hang(config, clock);
        } else {
            self.velocity.y = speed;
        }
        debug!("Jump released after {}s: vy={}", elapsed, self.velocity.y);
    }

    fn enter_hang(&mut self, config: &LocomotionConfig, clock: &TickClock) {
        self.velocity.y = 0.0;
        self.jump_hang.start(clock.secs(config.hang_time));
        self.jump = JumpState::Hanging;
    }
}
