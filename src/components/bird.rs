use bevy_ecs::prelude::Component;

/// Distant bird drawn as a flapping V.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Bird;

impl Bird {
    /// Half-width of the V for a given flap phase.
    pub fn span(flap: f32) -> f32 {
        9.0 + flap.sin() * 4.0
    }
}
