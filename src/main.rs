mod content;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Reference rate the frame-count tuning is authored against.
const TICKS_PER_SECOND: f64 = 60.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Olympia Locomotion".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND))
        .add_plugins((content::ContentPlugin, movement::MovementPlugin))
        .run();
}
