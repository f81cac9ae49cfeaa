//! Movement domain: input and preset selection resources.

use bevy::prelude::*;

use crate::movement::controller::LocomotionInput;

/// Logical actions sampled from the keyboard.
///
/// Held directions are overwritten every frame. Edge presses are latched
/// until a fixed tick consumes them, so a press is neither lost on a frame
/// without a fixed tick nor repeated on a frame with two.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    /// Build this tick's input and clear the latched edges.
    pub fn take(&mut self) -> LocomotionInput {
        let input = LocomotionInput {
            jump_pressed: self.jump_just_pressed,
            jump_released: self.jump_just_released,
            dash_pressed: self.dash_just_pressed,
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
        };
        self.jump_just_pressed = false;
        self.jump_just_released = false;
        self.dash_just_pressed = false;
        input
    }
}

/// Which locomotion preset the player spawns with.
#[derive(Resource, Debug, Clone)]
pub struct MovementSettings {
    pub active_preset: String,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            active_preset: "default".to_string(),
        }
    }
}
