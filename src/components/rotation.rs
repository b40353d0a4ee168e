//! Rotation angle with a constant per-frame spin.
//!
//! Advanced by [`crate::systems::motion::spin_system`]. Fragments and
//! petals are drawn in a frame rotated by `radians`.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub radians: f32,
    /// Radians added every frame.
    pub spin: f32,
}

impl Rotation {
    pub fn new(radians: f32, spin: f32) -> Self {
        Self { radians, spin }
    }
}
