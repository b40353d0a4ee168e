//! Simulation clock resource.
//!
//! [`WorldTime`] is advanced once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time). Lifetimes
//! (fragment and sparkle ages) are measured against `elapsed`, and spawn
//! timers accumulate `delta`.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds stepped while enabled.
    pub elapsed: f32,
    /// Duration of the last frame in seconds.
    pub delta: f32,
}
