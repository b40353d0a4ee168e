//! Kinematic body with a per-frame velocity and constant gravity.
//!
//! Velocities are in logical pixels per frame, not per second: the sky is
//! stepped once per display refresh and every population was tuned that way.
//! [`movement_system`](crate::systems::motion::movement_system) first adds
//! `gravity` to the vertical velocity, then adds the velocity to the
//! position.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Gravity applied to rising rockets, px/frame².
pub const ROCKET_GRAVITY: f32 = 0.06;
/// Gravity applied to burst fragments, px/frame².
pub const FRAGMENT_GRAVITY: f32 = 0.03;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Current velocity in px per frame.
    pub velocity: Vec2,
    /// Added to `velocity.y` every frame before integrating.
    pub gravity: f32,
}

impl RigidBody {
    /// Body drifting at constant velocity.
    pub fn new(vx: f32, vy: f32) -> Self {
        Self {
            velocity: Vec2::new(vx, vy),
            gravity: 0.0,
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Apply gravity then return the displacement for this frame.
    pub fn step(&mut self) -> Vec2 {
        self.velocity.y += self.gravity;
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_gravity() {
        let rb = RigidBody::new(1.0, -2.0);
        assert_eq!(rb.velocity, Vec2::new(1.0, -2.0));
        assert_eq!(rb.gravity, 0.0);
    }

    #[test]
    fn test_step_applies_gravity_first() {
        let mut rb = RigidBody::new(0.5, -8.0).with_gravity(ROCKET_GRAVITY);
        let d = rb.step();
        assert!((d.y - (-7.94)).abs() < 1e-5);
        assert_eq!(d.x, 0.5);
        assert_eq!(rb.velocity, d);
    }
}
