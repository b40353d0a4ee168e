//! Big burst event and observer.
//!
//! Emitting a [`BigBurstEvent`] (from a button, a key, or
//! [`Engine::big_burst`](crate::engine::Engine::big_burst)) spawns one large
//! burst at the center of the surface plus one extra rocket. The event
//! carries no data; while the engine is disabled it is ignored.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::engineconfig::EngineConfig;
use crate::resources::enginestate::EngineState;
use crate::resources::palette::Palette;
use crate::resources::randomsource::RandomSource;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::spawn::{spawn_burst, spawn_rocket};

/// Request a big burst at the surface center.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct BigBurstEvent {}

/// Observer that answers a [`BigBurstEvent`].
///
/// Spawns `EngineConfig::big_burst_count` fragments (plus sparks) at the
/// center and launches one rocket, all stamped with the current world time.
pub fn big_burst_observer(
    _trigger: On<BigBurstEvent>,
    mut commands: Commands,
    state: Res<EngineState>,
    config: Res<EngineConfig>,
    palette: Res<Palette>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
    mut rng: ResMut<RandomSource>,
) {
    if !state.is_enabled() {
        debug!("BigBurstEvent ignored: engine disabled");
        return;
    }
    debug!("BigBurstEvent triggered");
    let (cx, cy) = screen.center();
    spawn_burst(
        &mut commands,
        &mut rng,
        &palette,
        cx,
        cy,
        config.big_burst_count as usize,
        time.elapsed,
    );
    spawn_rocket(&mut commands, &mut rng, &palette, &screen, time.elapsed);
}
