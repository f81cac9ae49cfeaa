//! Movement domain: locomotion state machine producing one velocity per tick.
//!
//! [`LocomotionController::step`] is the whole per-tick pipeline:
//!
//! 1. Refresh velocity from the physics body and poll every timer.
//! 2. Read the contact list (friction overwrite, launch pad override).
//! 3. Run the Grounded / Airborne / Coyote machine, which may start a jump.
//! 4. Apply gravity and the jump sub-state (apex hang, early release).
//! 5. Apply the ground or air horizontal model.
//! 6. Let an active dash override both axes.

use bevy::prelude::*;

use crate::movement::config::LocomotionConfig;
use crate::movement::environment::{Surface, read_contacts};
use crate::movement::jump::JumpState;
use crate::movement::timer::FrameTimer;

/// A vertical velocity drop larger than this between our output and the
/// solved body velocity counts as an outside push (ceiling, platform).
pub const EXTERNAL_PUSH_EPSILON: f32 = 1e-3;

/// High-level phase of the character.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    Grounded,
    #[default]
    Airborne,
    /// Just walked off a ledge; a ground jump is still allowed.
    Coyote,
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Logical action states for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocomotionInput {
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl LocomotionInput {
    /// Horizontal input sign; opposite directions cancel.
    pub fn horizontal(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    pub fn vertical(&self) -> f32 {
        (self.up as i8 - self.down as i8) as f32
    }

    /// Held directions as a (not normalized) vector, +y up.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.horizontal(), self.vertical())
    }
}

/// What the physics step reported back after the previous tick.
#[derive(Debug, Clone, Copy)]
pub struct Surroundings<'a> {
    pub on_floor: bool,
    /// Bodies touched since the last tick, in contact order.
    pub contacts: &'a [Surface],
    /// Velocity of the body after the solver ran.
    pub body_velocity: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickClock {
    pub delta: f32,
    pub ticks_per_second: f32,
}

impl TickClock {
    /// A clock ticking exactly at `ticks_per_second`.
    pub fn fixed(ticks_per_second: f32) -> Self {
        Self {
            delta: 1.0 / ticks_per_second,
            ticks_per_second,
        }
    }

    pub fn secs(&self, frames: f32) -> f32 {
        LocomotionConfig::secs(frames, self.ticks_per_second)
    }
}

/// Locomotion state owned by one character.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct LocomotionController {
    pub(crate) locomotion: LocomotionState,
    pub(crate) jump: JumpState,
    pub(crate) velocity: Vec2,
    pub(crate) previous_velocity: Vec2,
    pub(crate) air_jumps_remaining: u8,
    pub(crate) dashes_remaining: u8,
    pub(crate) jump_buffer: FrameTimer,
    pub(crate) coyote: FrameTimer,
    pub(crate) jump_hang: FrameTimer,
    pub(crate) jump_hold: FrameTimer,
    pub(crate) dash: FrameTimer,
    /// Friction of the last touched friction surface. Never reset.
    pub(crate) ground_friction: f32,
    pub(crate) dash_velocity: Vec2,
    /// Set while a dash still owes its end-of-dash slowdown.
    pub(crate) dashing: bool,
    pub(crate) facing: Facing,
}

impl LocomotionController {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            locomotion: LocomotionState::Airborne,
            jump: JumpState::NotJumping,
            velocity: Vec2::ZERO,
            previous_velocity: Vec2::ZERO,
            air_jumps_remaining: config.max_air_jumps,
            dashes_remaining: config.max_dashes,
            jump_buffer: FrameTimer::default(),
            coyote: FrameTimer::default(),
            jump_hang: FrameTimer::default(),
            jump_hold: FrameTimer::default(),
            dash: FrameTimer::default(),
            ground_friction: config.ground_friction,
            dash_velocity: Vec2::ZERO,
            dashing: false,
            facing: Facing::default(),
        }
    }

    pub fn locomotion(&self) -> LocomotionState {
        self.locomotion
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn air_jumps_remaining(&self) -> u8 {
        self.air_jumps_remaining
    }

    pub fn dashes_remaining(&self) -> u8 {
        self.dashes_remaining
    }

    pub fn ground_friction(&self) -> f32 {
        self.ground_friction
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_active()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Run one fixed tick and return the velocity for the physics step.
    pub fn step(
        &mut self,
        config: &LocomotionConfig,
        input: &LocomotionInput,
        surroundings: &Surroundings,
        clock: &TickClock,
    ) -> Vec2 {
        self.velocity = surroundings.body_velocity;
        self.tick_timers(clock.delta);
        self.finish_dash(config);

        let overrides = read_contacts(surroundings.contacts);
        if let Some(friction) = overrides.friction {
            self.ground_friction = friction;
        }
        if let Some(launch) = overrides.launch {
            debug!("Launch pad: velocity forced to {:?}", launch);
            if input.jump_pressed {
                self.jump_buffer.start(clock.secs(config.jump_buffer));
            }
            self.velocity = launch;
            self.previous_velocity = launch;
            return launch;
        }

        // Must be measured before our own gravity touches the velocity.
        let pushed_down = self.velocity.y < self.previous_velocity.y - EXTERNAL_PUSH_EPSILON;

        let launched = self.update_locomotion(config, input, surroundings.on_floor, clock);
        self.update_jump(
            config,
            input,
            surroundings.on_floor,
            pushed_down,
            launched,
            clock,
        );
        self.update_horizontal(config, input, clock);
        self.update_dash(config, input, clock);
        self.update_facing(input);

        self.previous_velocity = self.velocity;
        self.velocity
    }

    fn tick_timers(&mut self, dt: f32) {
        self.jump_buffer.tick(dt);
        self.coyote.tick(dt);
        self.jump_hang.tick(dt);
        self.jump_hold.tick(dt);
        self.dash.tick(dt);
    }

    /// Grounded / Airborne / Coyote transitions. Returns whether a jump
    /// launched this tick.
    fn update_locomotion(
        &mut self,
        config: &LocomotionConfig,
        input: &LocomotionInput,
        on_floor: bool,
        clock: &TickClock,
    ) -> bool {
        let requested = input.jump_pressed || self.jump_buffer.is_active();
        let mut launched = false;

        match self.locomotion {
            LocomotionState::Grounded => {
                if requested {
                    self.start_jump(config, false, clock);
                    self.set_locomotion(LocomotionState::Airborne);
                    launched = true;
                } else if !on_floor {
                    self.set_locomotion(LocomotionState::Coyote);
                    self.coyote.start(clock.secs(config.coyote_time));
                } else {
                    self.dashes_remaining = config.max_dashes;
                }
            }
            LocomotionState::Airborne => {
                if on_floor {
                    self.refill(config);
                    if requested {
                        self.start_jump(config, true, clock);
                        launched = true;
                    } else {
                        self.set_locomotion(LocomotionState::Grounded);
                    }
                } else if requested && self.air_jumps_remaining > 0 {
                    self.start_jump(config, false, clock);
                    self.air_jumps_remaining -= 1;
                    launched = true;
                    debug!(
                        "Air jump: air_jumps_remaining now {}",
                        self.air_jumps_remaining
                    );
                }
            }
            LocomotionState::Coyote => {
                if on_floor {
                    self.refill(config);
                    self.set_locomotion(LocomotionState::Grounded);
                } else if self.coyote.is_expired() {
                    self.set_locomotion(LocomotionState::Airborne);
                } else if requested {
                    self.start_jump(config, false, clock);
                    self.set_locomotion(LocomotionState::Airborne);
                    launched = true;
                }
            }
        }

        if input.jump_pressed && !launched {
            self.jump_buffer.start(clock.secs(config.jump_buffer));
        }
        launched
    }

    fn set_locomotion(&mut self, next: LocomotionState) {
        if self.locomotion == next {
            return;
        }
        debug!("Locomotion: {:?} -> {:?}", self.locomotion, next);
        self.locomotion = next;
        if matches!(next, LocomotionState::Grounded | LocomotionState::Coyote) {
            self.cancel_jump();
        }
    }

    fn refill(&mut self, config: &LocomotionConfig) {
        self.air_jumps_remaining = config.max_air_jumps;
        self.dashes_remaining = config.max_dashes;
    }

    fn update_horizontal(
        &mut self,
        config: &LocomotionConfig,
        input: &LocomotionInput,
        clock: &TickClock,
    ) {
        if self.dash.is_active() {
            return;
        }
        let model = match self.locomotion {
            LocomotionState::Grounded => {
                config.ground_model(self.ground_friction, clock.ticks_per_second)
            }
            LocomotionState::Airborne | LocomotionState::Coyote => {
                config.air_model(clock.ticks_per_second)
            }
        };
        self.velocity.x = model.step(self.velocity.x, input.horizontal(), clock.delta);
    }

    fn update_facing(&mut self, input: &LocomotionInput) {
        if self.dash.is_active() {
            return;
        }
        let horizontal = input.horizontal();
        if horizontal > 0.0 {
            self.facing = Facing::Right;
        } else if horizontal < 0.0 {
            self.facing = Facing::Left;
        }
    }
}
