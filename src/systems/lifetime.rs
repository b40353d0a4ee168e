//! Lifetime system.
//!
//! This module provides the [`lifetime_system`] that despawns fragments and
//! sparkles once they are older than their life.
//!
//! # System Flow
//!
//! Runs first in the frame step, before anything moves or is drawn, so an
//! entity whose `age > life` never survives more than one frame past it.

use bevy_ecs::prelude::*;

use crate::components::lifetime::Lifetime;
use crate::resources::worldtime::WorldTime;

/// Despawns every entity whose [`Lifetime`] has expired.
pub fn lifetime_system(
    world_time: Res<WorldTime>,
    query: Query<(Entity, &Lifetime)>,
    mut commands: Commands,
) {
    let now = world_time.elapsed;
    for (entity, lifetime) in query.iter() {
        if lifetime.is_expired(now) {
            commands.entity(entity).try_despawn();
        }
    }
}
