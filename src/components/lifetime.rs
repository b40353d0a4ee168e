//! Age-limited entities.
//!
//! Fragments and sparkles are stamped with the world time at which they were
//! spawned and a life duration. Unlike a countdown, the birth stamp lets the
//! renderer derive fade-out from age without extra state.
//!
//! # How It Works
//!
//! 1. Entity is spawned with `Lifetime { born: now, life }`
//! 2. [`lifetime_system`](crate::systems::lifetime::lifetime_system) runs first
//!    in the frame and despawns any entity whose `age > life`
//! 3. Survivors are moved and drawn with an opacity derived from
//!    [`Lifetime::remaining_fraction`]
//!
//! # Related
//!
//! - [`crate::resources::worldtime::WorldTime`] – source of `now`

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Lifetime {
    /// World time (seconds) at spawn.
    pub born: f32,
    /// Duration in seconds.
    pub life: f32,
}

impl Lifetime {
    pub fn new(born: f32, life: f32) -> Self {
        Self { born, life }
    }

    pub fn age(&self, now: f32) -> f32 {
        now - self.born
    }

    /// Strictly older than its life. An entity exactly `life` old is still alive.
    pub fn is_expired(&self, now: f32) -> bool {
        self.age(now) > self.life
    }

    /// `1 - age/life`; 1 at birth, 0 at end of life, negative past it.
    pub fn remaining_fraction(&self, now: f32) -> f32 {
        if self.life <= 0.0 {
            return 0.0;
        }
        1.0 - self.age(now) / self.life
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_strict() {
        let l = Lifetime::new(1.0, 0.5);
        assert!(!l.is_expired(1.5));
        assert!(l.is_expired(1.5001));
    }

    #[test]
    fn test_remaining_fraction() {
        let l = Lifetime::new(0.0, 2.0);
        assert!((l.remaining_fraction(0.5) - 0.75).abs() < 1e-6);
        assert_eq!(Lifetime::new(0.0, 0.0).remaining_fraction(1.0), 0.0);
    }
}
