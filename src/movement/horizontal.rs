//! Movement domain: ground and air horizontal acceleration/friction.

/// Speeds below this snap to zero under friction.
pub const STOP_EPSILON: f32 = 1e-2;

/// Limits for one horizontal model (ground or air), already in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalModel {
    pub max_speed: f32,
    pub time_to_max_speed: f32,
    pub friction: f32,
}

impl HorizontalModel {
    /// Acceleration magnitude in units/s².
    pub fn acceleration(&self) -> f32 {
        if self.time_to_max_speed <= 0.0 {
            f32::INFINITY
        } else {
            self.max_speed / self.time_to_max_speed
        }
    }

    /// Advance one velocity component for a tick.
    ///
    /// `direction` is the input sign (-1, 0 or +1); zero means no input and
    /// applies friction instead.
    pub fn step(&self, velocity: f32, direction: f32, dt: f32) -> f32 {
        if direction == 0.0 {
            apply_friction(velocity, self.friction, dt)
        } else {
            accelerate(velocity, direction, self.max_speed, self.acceleration(), dt)
        }
    }
}

/// Accelerate toward `direction` without overshooting `max_speed`.
///
/// Speed already at or above the limit in the input direction is kept as-is,
/// so boosts from bunny hops or launches are not clipped.
pub fn accelerate(velocity: f32, direction: f32, max_speed: f32, accel: f32, dt: f32) -> f32 {
    let direction = direction.signum();
    let toward = velocity * direction;
    if toward >= max_speed {
        return velocity;
    }
    let next = (toward + accel * dt).min(max_speed);
    next * direction
}

/// Exponential decay `dv = -k * v * dt`, snapping to zero below [`STOP_EPSILON`].
pub fn apply_friction(velocity: f32, coefficient: f32, dt: f32) -> f32 {
    if velocity == 0.0 {
        return 0.0;
    }
    let factor = (1.0 - coefficient * dt).max(0.0);
    let next = velocity * factor;
    if next.abs() < STOP_EPSILON { 0.0 } else { next }
}
