//! Spawn timer systems.
//!
//! This module provides systems for processing [`SpawnTimer`] components:
//!
//! - [`update_spawn_timers`] – updates timer elapsed time and emits events when they expire
//! - [`spawn_timer_observer`] – observer that spawns new population members
//!
//! # System Flow
//!
//! Each frame:
//!
//! 1. `update_spawn_timers` accumulates delta time on all SpawnTimer components
//! 2. Every time `elapsed >= interval`, emits a `SpawnTimerEvent` and subtracts the interval
//! 3. `spawn_timer_observer` receives the event and rolls the chances
//!    configured in [`EngineConfig`] for that timer kind
//!
//! Spawned entities become visible to the rest of the frame schedule because
//! the schedule is chained.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::spawntimer::{SpawnKind, SpawnTimer};
use crate::events::spawntimer::SpawnTimerEvent;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::palette::Palette;
use crate::resources::randomsource::RandomSource;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::spawn::{
    spawn_bird, spawn_burst, spawn_butterfly, spawn_firefly, spawn_petal, spawn_rocket,
    spawn_sparkle,
};

/// Update all spawn timers and emit one event per expiry.
///
/// A long frame can fire a timer several times; each firing is a separate
/// [`SpawnTimerEvent`].
pub fn update_spawn_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut SpawnTimer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        let fired = timer.tick(world_time.delta);
        for _ in 0..fired {
            commands.trigger(SpawnTimerEvent {
                entity,
                kind: timer.kind,
            });
        }
    }
}

/// Observer that handles spawn timer events.
///
/// - `Rocket`: one rocket with `rocket_chance`
/// - `Nature`: petal, butterfly, bird and firefly, each rolled independently
/// - `Sparkle`: one sparkle with `sparkle_chance`
/// - `AutoBurst`: always a burst of 20 to 39 fragments at a random point in
///   the central region
pub fn spawn_timer_observer(
    trigger: On<SpawnTimerEvent>,
    mut commands: Commands,
    config: Res<EngineConfig>,
    palette: Res<Palette>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
    mut rng: ResMut<RandomSource>,
) {
    let event = trigger.event();
    let now = time.elapsed;
    trace!("spawn timer {:?} fired on {:?}", event.kind, event.entity);

    match event.kind {
        SpawnKind::Rocket => {
            if rng.chance(config.rocket_chance) {
                spawn_rocket(&mut commands, &mut rng, &palette, &screen, now);
            }
        }
        SpawnKind::Nature => {
            if rng.chance(config.petal_chance) {
                spawn_petal(&mut commands, &mut rng, &screen);
            }
            if rng.chance(config.butterfly_chance) {
                spawn_butterfly(&mut commands, &mut rng, &palette, &screen);
            }
            if rng.chance(config.bird_chance) {
                spawn_bird(&mut commands, &mut rng, &screen);
            }
            if rng.chance(config.firefly_chance) {
                spawn_firefly(&mut commands, &mut rng, &screen);
            }
        }
        SpawnKind::Sparkle => {
            if rng.chance(config.sparkle_chance) {
                spawn_sparkle(&mut commands, &mut rng, &screen, now);
            }
        }
        SpawnKind::AutoBurst => {
            let cx = rng.between(screen.w * 0.1, screen.w * 0.9);
            let cy = rng.between(screen.h * 0.2, screen.h * 0.7);
            let count = rng.between(20.0, 40.0).floor() as usize;
            spawn_burst(&mut commands, &mut rng, &palette, cx, cy, count, now);
        }
    }
}
