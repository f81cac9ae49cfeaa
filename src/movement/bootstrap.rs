//! Movement domain: player bootstrap from the selected locomotion preset.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::LocomotionPresets;
use crate::movement::{
    GameLayer, GroundContact, LocomotionConfig, LocomotionController, MovementSettings, Player,
    TouchedSurfaces,
};

/// Resolve the active preset, falling back to built-in tuning.
pub(crate) fn resolve_config(
    presets: Option<&LocomotionPresets>,
    settings: &MovementSettings,
) -> LocomotionConfig {
    match presets.and_then(|p| p.get(&settings.active_preset)) {
        Some(preset) => {
            info!("Using locomotion preset '{}'", preset.name);
            preset.config.clone()
        }
        None => {
            warn!(
                "Locomotion preset '{}' not found, using defaults",
                settings.active_preset
            );
            LocomotionConfig::default()
        }
    }
}

/// Spawn the player with a controller built from the active preset.
pub(crate) fn bootstrap_player(
    mut commands: Commands,
    presets: Option<Res<LocomotionPresets>>,
    settings: Res<MovementSettings>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let config = resolve_config(presets.as_deref(), &settings);
    info!(
        "Spawning player: gravity={}, jump_height={}, air_jumps={}, dashes={}",
        config.gravity, config.max_jump_height, config.max_air_jumps, config.max_dashes
    );

    commands.spawn((
        // Identity & Locomotion
        (
            Player,
            LocomotionController::new(&config),
            config,
            GroundContact::default(),
            TouchedSurfaces::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller integrates gravity itself
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
