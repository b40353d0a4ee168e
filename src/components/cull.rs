//! Off-surface removal rules.
//!
//! Drifting populations have no lifetime; they are removed once they leave
//! the surface by a margin. Each population leaves in a different direction,
//! so the rule is data on the entity and a single
//! [`cull_offscreen_system`](crate::systems::cull::cull_offscreen_system)
//! applies all of them.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::screensize::ScreenSize;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum OffscreenCull {
    /// Removed when `y > h + margin` (petals).
    Below(f32),
    /// Removed when `x > w + margin` (butterflies, birds).
    PastRight(f32),
    /// Removed when more than `margin` outside any edge (fireflies).
    AnyEdge(f32),
}

impl OffscreenCull {
    pub fn is_outside(&self, pos: Vec2, screen: &ScreenSize) -> bool {
        match *self {
            OffscreenCull::Below(m) => pos.y > screen.h + m,
            OffscreenCull::PastRight(m) => pos.x > screen.w + m,
            OffscreenCull::AnyEdge(m) => {
                pos.x < -m || pos.x > screen.w + m || pos.y < -m || pos.y > screen.h + m
            }
        }
    }
}
