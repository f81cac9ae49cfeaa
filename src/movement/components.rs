//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::environment::Surface;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors, platforms and launch pads
    Ground,
    Wall,
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Floor sensor result for the current fixed tick.
#[derive(Component, Debug, Default)]
pub struct GroundContact {
    pub on_ground: bool,
}

/// Surfaces touched since the controller last ran, in contact order.
#[derive(Component, Debug, Default)]
pub struct TouchedSurfaces(pub Vec<Surface>);
