use bevy_ecs::prelude::Component;

/// Background star. Seeded once per surface size and never culled.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Base brightness in `[0.2, 0.8)`. Also speeds up the twinkle.
    pub base: f32,
    /// Side of the square in px.
    pub size: f32,
}

impl Star {
    /// Phase advance per frame.
    pub fn twinkle_rate(base: f32) -> f32 {
        0.02 + base * 0.02
    }

    pub fn brightness(&self, phase: f32) -> f32 {
        (self.base + (phase.sin() + 1.0) * 0.25).min(1.0)
    }
}
