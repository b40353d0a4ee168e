//! Spawn timer events.
//!
//! When a [`SpawnTimer`](crate::components::spawntimer::SpawnTimer) reaches
//! its interval, a [`SpawnTimerEvent`] is triggered. The
//! [`spawn_timer_observer`](crate::systems::spawntimer::spawn_timer_observer)
//! rolls the configured probabilities and spawns.
//!
//! # Related
//!
//! - [`crate::systems::spawntimer::update_spawn_timers`] – the system that emits these events

use bevy_ecs::prelude::*;

use crate::components::spawntimer::SpawnKind;

/// Event emitted each time a spawn timer fires.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimerEvent {
    /// The timer entity that fired.
    pub entity: Entity,
    pub kind: SpawnKind,
}
