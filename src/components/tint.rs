//! Fill color component.
//!
//! Rockets, fragments, butterflies, birds and fireflies carry a [`Tint`].
//! Petals derive their color from their hue instead, and stars and sparkles
//! are always white.

use bevy_ecs::prelude::Component;

use crate::resources::canvas::Color;

#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
