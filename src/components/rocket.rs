//! Rising firework rocket.
//!
//! A rocket climbs with [`ROCKET_GRAVITY`](super::rigidbody::ROCKET_GRAVITY)
//! slowing it down and detonates into a burst once it stops rising or passes
//! its explosion height. See
//! [`rocket_detonation_system`](crate::systems::rockets::rocket_detonation_system).

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Rocket {
    /// Detonates once `y <= explode_height` (y grows downward).
    pub explode_height: f32,
    /// World time at launch.
    pub born: f32,
}

impl Rocket {
    /// Apex reached or height threshold crossed.
    pub fn should_explode(&self, y: f32, vy: f32) -> bool {
        vy >= 0.0 || y <= self.explode_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_explode() {
        let r = Rocket {
            explode_height: 200.0,
            born: 0.0,
        };
        assert!(!r.should_explode(300.0, -4.0));
        assert!(r.should_explode(200.0, -4.0));
        assert!(r.should_explode(350.0, 0.0));
    }
}
