//! Movement domain: surfaces a character can touch and what they override.

use bevy::prelude::*;

/// Capability a touched body offers the controller.
///
/// Terrain and moving platforms carry [`Surface::Friction`]; launch pads
/// carry [`Surface::Launch`]. Anything else is [`Surface::None`].
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Default)]
#[reflect(Component)]
pub enum Surface {
    #[default]
    None,
    Friction(f32),
    Launch { direction: Vec2, magnitude: f32 },
}

impl Surface {
    pub fn launch(direction: Vec2, magnitude: f32) -> Self {
        Self::Launch {
            direction,
            magnitude,
        }
    }
}

/// Result of reading one tick's contact list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactOverrides {
    /// Friction of the last friction surface in the list.
    pub friction: Option<f32>,
    /// Velocity forced by the last launch pad in the list.
    pub launch: Option<Vec2>,
}

/// Fold an ordered contact list; later entries win. A launch with no
/// direction is ignored.
pub fn read_contacts(contacts: &[Surface]) -> ContactOverrides {
    let mut overrides = ContactOverrides::default();
    for surface in contacts {
        match *surface {
            Surface::None => {}
            Surface::Friction(coefficient) => overrides.friction = Some(coefficient),
            Surface::Launch {
                direction,
                magnitude,
            } => {
                let direction = direction.normalize_or_zero();
                if direction != Vec2::ZERO {
                    overrides.launch = Some(direction * magnitude);
                }
            }
        }
    }
    overrides
}
