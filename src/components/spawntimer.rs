//! Periodic spawn timer component.
//!
//! The [`SpawnTimer`] component accumulates time and fires a
//! [`SpawnTimerEvent`](crate::events::spawntimer::SpawnTimerEvent) every
//! `interval` seconds. Each timer is an entity, so cancelling every timer at
//! once is a matter of despawning them.
//!
//! # How It Works
//!
//! 1. [`Engine::start`](crate::engine::Engine::start) spawns one timer per [`SpawnKind`]
//! 2. [`update_spawn_timers`](crate::systems::spawntimer::update_spawn_timers)
//!    accumulates `WorldTime::delta` and triggers an event each time
//!    `elapsed >= interval`
//! 3. [`spawn_timer_observer`](crate::systems::spawntimer::spawn_timer_observer)
//!    rolls the configured chances and spawns
//!
//! # Related
//!
//! - [`crate::resources::engineconfig::EngineConfig`] – intervals and chances

use bevy_ecs::prelude::Component;

/// What a spawn timer produces when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnKind {
    /// One rocket, probability-gated.
    Rocket,
    /// Petal, butterfly, bird and firefly, each with its own chance.
    Nature,
    /// One sparkle, probability-gated.
    Sparkle,
    /// A mid-size burst somewhere in the central region.
    AutoBurst,
}

#[derive(Component, Debug, Clone)]
pub struct SpawnTimer {
    pub kind: SpawnKind,
    /// Seconds between firings.
    pub interval: f32,
    pub elapsed: f32,
}

impl SpawnTimer {
    pub fn new(kind: SpawnKind, interval: f32) -> Self {
        SpawnTimer {
            kind,
            interval,
            elapsed: 0.0,
        }
    }

    /// Accumulate `dt` and return how many times the timer fired.
    ///
    /// The remainder is kept (subtract, not zero) so firing stays periodic
    /// even when frame times don't divide the interval. A non-positive
    /// interval never fires.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}
