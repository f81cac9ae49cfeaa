//! Movement domain: fixed-tick driver handing velocities to the physics step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GroundContact, LocomotionConfig, LocomotionController, MovementInput, Player, Surroundings,
    TickClock, TouchedSurfaces,
};

/// Run every player's controller once and write the result into the body.
///
/// The solver moves the body after this system; the velocity it leaves
/// behind is read back next tick as the controller's feedback.
pub(crate) fn drive_locomotion(
    time: Res<Time>,
    fixed_time: Res<Time<Fixed>>,
    mut input: ResMut<MovementInput>,
    mut query: Query<
        (
            &LocomotionConfig,
            &mut LocomotionController,
            &GroundContact,
            &mut TouchedSurfaces,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let timestep = fixed_time.timestep().as_secs_f32();
    if timestep <= 0.0 {
        return;
    }
    let clock = TickClock {
        delta: time.delta_secs(),
        ticks_per_second: 1.0 / timestep,
    };
    let tick_input = input.take();

    for (config, mut controller, contact, mut touched, mut velocity) in &mut query {
        let surroundings = Surroundings {
            on_floor: contact.on_ground,
            contacts: &touched.0,
            body_velocity: velocity.0,
        };
        velocity.0 = controller.step(config, &tick_input, &surroundings, &clock);
        touched.0.clear();
    }
}
