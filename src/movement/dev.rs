//! Movement domain: debug-only test room and preset switching.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LocomotionPresets;
use crate::movement::{
    GameLayer, Ground, LocomotionConfig, LocomotionController, MovementSettings, Player, Surface,
    Wall,
};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    commands.spawn(Camera2d);

    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let ice_color = Color::srgb(0.7, 0.85, 0.95);
    let mud_color = Color::srgb(0.45, 0.35, 0.25);
    let pad_color = Color::srgb(0.9, 0.5, 0.2);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut ground = |surface: Surface, color: Color, size: Vec2, at: Vec2| {
        commands.spawn((
            Ground,
            surface,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    };

    // Floor
    ground(
        Surface::Friction(20.0),
        ground_color,
        Vec2::new(800.0, 40.0),
        Vec2::new(0.0, -200.0),
    );
    // Ice strip - barely slows the player
    ground(
        Surface::Friction(1.5),
        ice_color,
        Vec2::new(150.0, 20.0),
        Vec2::new(-250.0, -50.0),
    );
    // Mud strip - stops almost instantly
    ground(
        Surface::Friction(60.0),
        mud_color,
        Vec2::new(150.0, 20.0),
        Vec2::new(250.0, 50.0),
    );
    // Launch pad - throws the player up and to the right
    ground(
        Surface::launch(Vec2::new(0.3, 1.0), 900.0),
        pad_color,
        Vec2::new(60.0, 10.0),
        Vec2::new(-60.0, -175.0),
    );

    for x in [-420.0, 420.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 500.0)),
                ..default()
            },
            Transform::from_xyz(x, 50.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 500.0),
            wall_layers,
        ));
    }
}

/// F1 swaps the player onto the next locomotion preset.
pub(crate) fn cycle_preset(
    keyboard: Res<ButtonInput<KeyCode>>,
    presets: Option<Res<LocomotionPresets>>,
    mut settings: ResMut<MovementSettings>,
    mut query: Query<(&mut LocomotionConfig, &mut LocomotionController), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }
    let Some(presets) = presets else {
        return;
    };
    let Some(next_id) = presets.next_after(&settings.active_preset) else {
        return;
    };
    let Some(preset) = presets.get(next_id) else {
        return;
    };

    settings.active_preset = preset.id.clone();
    for (mut config, mut controller) in &mut query {
        *config = preset.config.clone();
        *controller = LocomotionController::new(&config);
    }
    info!("Switched locomotion preset to '{}'", preset.name);
}
