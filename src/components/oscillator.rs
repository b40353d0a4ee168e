//! Phase accumulator for periodic motion and twinkling.
//!
//! Stars, butterflies, birds and fireflies each advance a phase by a fixed
//! amount per frame and feed its sine into their brightness or path. The
//! [`Oscillator`] keeps that phase; the population systems decide what the
//! sine means.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Oscillator {
    /// Current phase in radians. Not wrapped.
    pub phase: f32,
    /// Radians added every frame.
    pub rate: f32,
}

impl Oscillator {
    pub fn new(phase: f32, rate: f32) -> Self {
        Self { phase, rate }
    }

    pub fn sin(&self) -> f32 {
        self.phase.sin()
    }

    pub fn advance(&mut self) {
        self.phase += self.rate;
    }
}
