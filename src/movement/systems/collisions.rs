//! Movement domain: floor detection and contact gathering.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, Player, Surface, TouchedSurfaces};

/// Upward speed above which a floor hit is ignored, so the launch tick of a
/// jump does not read as a landing.
const RISING_THRESHOLD: f32 = 1.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<
        (&Transform, &Collider, &LinearVelocity, &mut GroundContact),
        With<Player>,
    >,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, velocity, mut contact) in &mut query {
        let was_on_ground = contact.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);
        let ray_distance = 4.0;

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            ray_distance,
            true,
            &ground_filter,
        );

        contact.on_ground = hit.is_some() && velocity.y <= RISING_THRESHOLD;

        if contact.on_ground != was_on_ground {
            debug!("Floor contact: on_ground={}", contact.on_ground);
        }
    }
}

/// Collect the surfaces each player started touching, in message order.
pub(crate) fn gather_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    surfaces: Query<&Surface>,
    mut players: Query<&mut TouchedSurfaces, With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other_entity) in pairs {
            let Ok(mut touched) = players.get_mut(player_entity) else {
                continue;
            };
            if let Ok(surface) = surfaces.get(other_entity) {
                touched.0.push(*surface);
            }
        }
    }
}
