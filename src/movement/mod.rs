//! Movement domain: platformer locomotion controller and its plugin wiring.
//!
//! The controller itself ([`LocomotionController`]) is plain data stepped once
//! per fixed tick. The systems around it sample input, detect the floor,
//! collect touched surfaces and hand the resulting velocity to avian2d,
//! whose solver does the sweep-move.

mod bootstrap;
mod components;
mod config;
mod controller;
mod dash;
#[cfg(feature = "dev-tools")]
mod dev;
mod environment;
mod horizontal;
mod jump;
mod resources;
mod systems;
mod timer;

pub use components::{GameLayer, Ground, GroundContact, Player, TouchedSurfaces, Wall};
pub use config::LocomotionConfig;
pub use controller::{
    Facing, LocomotionController, LocomotionInput, LocomotionState, Surroundings, TickClock,
};
pub use environment::Surface;
pub use jump::JumpState;
pub use resources::{MovementInput, MovementSettings};

use bevy::prelude::*;

use crate::movement::bootstrap::bootstrap_player;
use crate::movement::systems::{detect_ground, drive_locomotion, gather_contacts, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionConfig>()
            .register_type::<LocomotionController>()
            .register_type::<Surface>()
            .init_resource::<MovementInput>()
            .init_resource::<MovementSettings>()
            .add_systems(Startup, bootstrap_player)
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (detect_ground, gather_contacts, drive_locomotion).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::cycle_preset);
    }
}
