//! Movement domain: per-character locomotion tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::horizontal::HorizontalModel;

/// Tuning for one character, fixed at spawn.
///
/// Every duration is a frame count at the reference rate. Convert with
/// [`LocomotionConfig::secs`] against the active tick rate whenever a timer
/// is armed, so the feel survives a tick-rate change.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Downward acceleration (units/s²).
    pub gravity: f32,
    pub max_run_speed: f32,
    pub max_air_speed: f32,
    /// Frames to reach `max_run_speed` from rest.
    pub time_to_max_run_speed: f32,
    /// Frames to reach `max_air_speed` from rest.
    pub time_to_max_air_speed: f32,
    /// Starting ground friction; surfaces overwrite the live value.
    pub ground_friction: f32,
    pub air_friction: f32,
    pub coyote_time: f32,
    pub jump_buffer: f32,
    /// Apex height of a fully held jump (units).
    pub max_jump_height: f32,
    pub hang_time: f32,
    /// Anti-gravity applied while hanging at the apex (units/s²).
    pub hang_smoothing: f32,
    pub max_jump_hold_time: f32,
    /// Horizontal multiplier for a jump taken on the landing tick.
    pub bhop_boost: f32,
    pub max_air_jumps: u8,
    pub max_dashes: u8,
    pub dash_velocity: f32,
    pub dash_time: f32,
    /// Velocity scale applied once when a dash ends.
    pub dash_end_ratio: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            gravity: 3000.0,
            max_run_speed: 200.0,
            max_air_speed: 200.0,
            time_to_max_run_speed: 3.0,
            time_to_max_air_speed: 6.0,
            ground_friction: 20.0,
            air_friction: 4.0,
            coyote_time: 6.0,
            jump_buffer: 6.0,
            max_jump_height: 75.0,
            hang_time: 4.0,
            hang_smoothing: 2000.0,
            max_jump_hold_time: 12.0,
            bhop_boost: 1.2,
            max_air_jumps: 1,
            max_dashes: 1,
            dash_velocity: 600.0,
            dash_time: 10.0,
            dash_end_ratio: 0.3,
        }
    }
}

impl LocomotionConfig {
    /// Convert a frame count to seconds at `ticks_per_second`.
    pub fn secs(frames: f32, ticks_per_second: f32) -> f32 {
        if ticks_per_second <= 0.0 {
            0.0
        } else {
            frames / ticks_per_second
        }
    }

    /// Launch speed reaching `max_jump_height`: v = sqrt(2gh).
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.gravity * self.max_jump_height).max(0.0).sqrt()
    }

    pub fn ground_model(&self, friction: f32, ticks_per_second: f32) -> HorizontalModel {
        HorizontalModel {
            max_speed: self.max_run_speed,
            time_to_max_speed: Self::secs(self.time_to_max_run_speed, ticks_per_second),
            friction,
        }
    }

    pub fn air_model(&self, ticks_per_second: f32) -> HorizontalModel {
        HorizontalModel {
            max_speed: self.max_air_speed,
            time_to_max_speed: Self::secs(self.time_to_max_air_speed, ticks_per_second),
            friction: self.air_friction,
        }
    }
}
