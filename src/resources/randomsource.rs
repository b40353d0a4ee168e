//! Shared random number source.
//!
//! All spawn parameters and probability gates draw from one [`RandomSource`]
//! so a seeded engine replays the same sky frame for frame.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// Wrapper around a `fastrand` generator stored as an ECS resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct RandomSource(pub Rng);

impl RandomSource {
    /// Deterministic source for tests and reproducible snapshots.
    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }

    /// Uniform float in `[min, max)`.
    pub fn between(&mut self, min: f32, max: f32) -> f32 {
        random_f32_range(&mut self.0, min, max)
    }

    /// Returns true with probability `p` (clamped to 0..1).
    ///
    /// `p >= 1` always passes and `p <= 0` never does.
    pub fn chance(&mut self, p: f32) -> bool {
        if p >= 1.0 {
            return true;
        }
        if p <= 0.0 {
            return false;
        }
        self.0.f32() < p
    }

    /// Pick one element, or `None` for an empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            Some(items[self.0.usize(..items.len())])
        }
    }
}

/// Uniform float in `[min, max)`; returns `min` when the range is empty.
pub fn random_f32_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    if max <= min {
        min
    } else {
        min + rng.f32() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_stays_in_range() {
        let mut r = RandomSource::with_seed(7);
        for _ in 0..1000 {
            let v = r.between(-0.6, 0.6);
            assert!((-0.6..0.6).contains(&v));
        }
    }

    #[test]
    fn test_between_degenerate_range() {
        let mut r = RandomSource::with_seed(1);
        assert_eq!(r.between(3.0, 3.0), 3.0);
        assert_eq!(r.between(5.0, 1.0), 5.0);
    }

    #[test]
    fn test_chance_extremes() {
        let mut r = RandomSource::with_seed(3);
        for _ in 0..100 {
            assert!(r.chance(1.0));
            assert!(!r.chance(0.0));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomSource::with_seed(42);
        let mut b = RandomSource::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.between(0.0, 1.0), b.between(0.0, 1.0));
        }
    }

    #[test]
    fn test_pick() {
        let mut r = RandomSource::with_seed(9);
        assert_eq!(r.pick::<u8>(&[]), None);
        assert_eq!(r.pick(&[4]), Some(4));
        let v = r.pick(&[1, 2, 3]).unwrap();
        assert!((1..=3).contains(&v));
    }
}
