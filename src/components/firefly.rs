use bevy_ecs::prelude::Component;

/// Low hovering firefly with a pulsing glow.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Firefly;

impl Firefly {
    /// Glow opacity for a given phase: 0.4 to 1.0.
    pub fn brightness(phase: f32) -> f32 {
        0.4 + (phase.sin() + 1.0) * 0.3
    }
}
