use bevy_ecs::prelude::Component;

/// Butterfly crossing left to right on a sine path.
///
/// The phase lives in an [`Oscillator`](super::oscillator::Oscillator); it
/// drives both the vertical bob and the wing size.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Butterfly {
    /// Path amplitude; the per-frame bob is `sin(phase) * amplitude / 10`.
    pub amplitude: f32,
}

impl Butterfly {
    /// Wing ellipse major radius for a given phase: 6 to 14 px.
    pub fn wing(phase: f32) -> f32 {
        6.0 + ((phase * 2.0).sin() + 1.0) * 4.0
    }
}
