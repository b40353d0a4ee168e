use bevy_ecs::prelude::Component;

/// Static twinkle that fades over its [`Lifetime`](super::lifetime::Lifetime).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub size: f32,
}

impl Sparkle {
    /// Opacity from the remaining life fraction, never below 0.2.
    pub fn alpha(remaining_fraction: f32) -> f32 {
        remaining_fraction.max(0.2).min(1.0)
    }
}
