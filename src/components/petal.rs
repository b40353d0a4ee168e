use bevy_ecs::prelude::Component;

use crate::resources::canvas::Color;

/// Falling flower petal. Colored `hsl(hue, 85%, 70%)`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Petal {
    pub size: f32,
    /// Degrees, in the pink range.
    pub hue: f32,
}

impl Petal {
    pub fn color(&self) -> Color {
        Color::from_hsl(self.hue, 0.85, 0.7)
    }
}
