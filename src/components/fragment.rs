//! Burst fragment: a short-lived heart, star or disc thrown out by a burst.

use bevy_ecs::prelude::Component;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FragmentShape {
    Heart,
    Circle,
    Star,
}

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Fragment {
    /// Nominal size in px; each shape scales it differently when drawn.
    pub size: f32,
    pub shape: FragmentShape,
}

/// Opacity never drops below this while the fragment is alive.
pub const FRAGMENT_MIN_ALPHA: f32 = 0.85;

impl Fragment {
    pub fn new(size: f32, shape: FragmentShape) -> Self {
        Self { size, shape }
    }

    /// Opacity from the remaining life fraction, floor-clamped.
    pub fn alpha(remaining_fraction: f32) -> f32 {
        remaining_fraction.max(FRAGMENT_MIN_ALPHA).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_floor() {
        assert_eq!(Fragment::alpha(1.0), 1.0);
        assert_eq!(Fragment::alpha(0.9), 0.9);
        assert_eq!(Fragment::alpha(0.1), FRAGMENT_MIN_ALPHA);
    }
}
