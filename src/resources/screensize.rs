//! Screen size resource.
//!
//! Stores the logical size of the drawing surface and its device pixel
//! ratio. Spawn helpers read it to place new entities and cull rules read it
//! to decide when something has left the sky.

use bevy_ecs::prelude::Resource;

/// Logical surface size plus device pixel ratio.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in logical pixels.
    pub w: f32,
    /// Height in logical pixels.
    pub h: f32,
    pub dpr: f32,
}

impl ScreenSize {
    pub fn new(w: u32, h: u32, dpr: f32) -> Self {
        ScreenSize {
            w: w as f32,
            h: h as f32,
            dpr,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.w * 0.5, self.h * 0.5)
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }
}
