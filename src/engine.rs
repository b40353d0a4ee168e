//! The animation engine.
//!
//! [`Engine`] owns the ECS [`World`] holding every population and the frame
//! [`Schedule`] that steps them. It has an explicit lifecycle:
//!
//! - [`Engine::new`] builds the world, seeds the background stars and leaves
//!   the engine disabled;
//! - [`Engine::start`] spawns the spawn timers, launches the initial rockets
//!   and enables the frame step;
//! - [`Engine::frame`] advances time and runs one frame step;
//! - [`Engine::stop`] despawns every timer and transient entity in one pass
//!   and clears the canvas. Dropping the engine stops it too.
//!
//! A zero-area surface produces an engine without a [`Canvas`]; every
//! operation on it is then a silent no-op. A `start` requested while there is
//! no surface (or a running engine resized to nothing, such as a minimised
//! window) is remembered and honoured by the next resize that brings a
//! surface back.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use serde::Serialize;

use crate::components::bird::Bird;
use crate::components::butterfly::Butterfly;
use crate::components::firefly::Firefly;
use crate::components::fragment::Fragment;
use crate::components::persistent::Persistent;
use crate::components::petal::Petal;
use crate::components::rocket::Rocket;
use crate::components::spawntimer::{SpawnKind, SpawnTimer};
use crate::components::sparkle::Sparkle;
use crate::components::star::Star;
use crate::events::bigburst::{BigBurstEvent, big_burst_observer};
use crate::resources::canvas::Canvas;
use crate::resources::engineconfig::EngineConfig;
use crate::resources::enginestate::{EngineState, EngineStates};
use crate::resources::palette::Palette;
use crate::resources::randomsource::RandomSource;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::cull::cull_offscreen_system;
use crate::systems::enginestate::state_is_enabled;
use crate::systems::lifetime::lifetime_system;
use crate::systems::motion::{
    bird_glide_system, butterfly_flutter_system, firefly_hover_system, movement_system,
    oscillator_system, petal_drift_system, spin_system,
};
use crate::systems::render::render_system;
use crate::systems::rockets::rocket_detonation_system;
use crate::systems::spawn::{seed_stars, spawn_burst, spawn_rocket};
use crate::systems::spawntimer::{spawn_timer_observer, update_spawn_timers};
use crate::systems::time::update_world_time;

/// Construction parameters for an [`Engine`].
///
/// Surface size, pixel ratio and accent palette come from the
/// configuration; `seed` makes every random choice reproducible.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub config: EngineConfig,
    pub seed: Option<u64>,
}

impl EngineOptions {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Snapshot of how many members each population has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PopulationCounts {
    pub rockets: usize,
    pub fragments: usize,
    pub petals: usize,
    pub butterflies: usize,
    pub birds: usize,
    pub fireflies: usize,
    pub stars: usize,
    pub sparkles: usize,
    /// Active spawn timers; zero while stopped.
    pub timers: usize,
}

/// Owned animation engine: world, frame schedule and lifecycle.
pub struct Engine {
    world: World,
    schedule: Schedule,
    /// Start again as soon as a resize provides a canvas.
    resume_on_surface: bool,
}

fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_spawn_timers,
            lifetime_system,
            oscillator_system,
            movement_system,
            petal_drift_system,
            butterfly_flutter_system,
            bird_glide_system,
            firefly_hover_system,
            spin_system,
            rocket_detonation_system,
            cull_offscreen_system,
            render_system,
        )
            .chain()
            .run_if(state_is_enabled),
    );
    schedule
}

impl Engine {
    /// Build a disabled engine and seed its background stars.
    pub fn new(options: EngineOptions) -> Self {
        let config = options.config;
        let mut world = World::new();

        world.insert_resource(WorldTime::default());
        world.insert_resource(ScreenSize::new(config.width, config.height, config.dpr));
        world.insert_resource(EngineState::new());
        world.insert_resource(Palette::new(&config.accent));
        world.insert_resource(match options.seed {
            Some(seed) => RandomSource::with_seed(seed),
            None => RandomSource::default(),
        });
        match Canvas::new(config.width, config.height, config.dpr) {
            Some(canvas) => world.insert_resource(canvas),
            None => warn!(
                "No drawing surface for {}x{} @{}x; engine will stay idle",
                config.width, config.height, config.dpr
            ),
        }
        world.insert_resource(config);

        world.spawn((Observer::new(spawn_timer_observer), Persistent));
        world.spawn((Observer::new(big_burst_observer), Persistent));
        world.flush();

        let mut engine = Engine {
            world,
            schedule: frame_schedule(),
            resume_on_surface: false,
        };
        engine.reseed_stars();
        engine
    }

    pub fn is_enabled(&self) -> bool {
        self.world.resource::<EngineState>().is_enabled()
    }

    /// Whether a `start` is pending until the surface has pixels again.
    pub fn is_waiting_for_surface(&self) -> bool {
        self.resume_on_surface
    }

    pub fn has_canvas(&self) -> bool {
        self.world.contains_resource::<Canvas>()
    }

    /// Spawn the timers, launch the initial rockets, and enable frame steps.
    ///
    /// No-op when already enabled. Without a drawing surface the request is
    /// deferred until a resize provides one.
    pub fn start(&mut self) {
        if self.is_enabled() {
            return;
        }
        if !self.has_canvas() {
            debug!("Start deferred until the surface has pixels");
            self.resume_on_surface = true;
            return;
        }
        let config = self.world.resource::<EngineConfig>().clone();
        for (kind, interval) in [
            (SpawnKind::Rocket, config.rocket_interval),
            (SpawnKind::Nature, config.nature_interval),
            (SpawnKind::Sparkle, config.sparkle_interval),
            (SpawnKind::AutoBurst, config.auto_burst_interval),
        ] {
            self.world.spawn(SpawnTimer::new(kind, interval));
        }
        for _ in 0..config.initial_rockets {
            self.spawn_rocket();
        }
        self.world
            .resource_mut::<EngineState>()
            .set(EngineStates::Enabled);
        info!(
            "Engine started with {} rockets in flight",
            config.initial_rockets
        );
    }

    /// Cancel every timer, drop every transient entity, and clear the canvas.
    ///
    /// Background stars survive. Also drops a deferred start. No-op when
    /// already disabled.
    pub fn stop(&mut self) {
        self.resume_on_surface = false;
        if !self.is_enabled() {
            return;
        }
        let removed = self.despawn_where::<Without<Persistent>>();
        if let Some(mut canvas) = self.world.get_resource_mut::<Canvas>() {
            canvas.clear();
        }
        self.world
            .resource_mut::<EngineState>()
            .set(EngineStates::Disabled);
        info!("Engine stopped, {} entities removed", removed);
    }

    pub fn toggle(&mut self) {
        if self.is_enabled() || self.resume_on_surface {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Advance time by `dt` seconds and run one frame step. Nothing happens
    /// while disabled.
    pub fn frame(&mut self, dt: f32) {
        if !self.is_enabled() {
            return;
        }
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Trigger the big burst signal. Ignored while disabled.
    pub fn big_burst(&mut self) {
        self.world.trigger(BigBurstEvent {});
        self.world.flush();
    }

    /// Spawn a burst of `count` fragments plus sparks, stamped with the current time.
    pub fn spawn_burst(&mut self, cx: f32, cy: f32, count: usize) {
        if !self.has_canvas() {
            return;
        }
        let now = self.world.resource::<WorldTime>().elapsed;
        let palette = self.world.resource::<Palette>().clone();
        self.world
            .resource_scope(|world, mut rng: Mut<RandomSource>| {
                let mut commands = world.commands();
                spawn_burst(&mut commands, &mut rng, &palette, cx, cy, count, now);
            });
        self.world.flush();
    }

    /// Launch one rocket, stamped with the current time.
    pub fn spawn_rocket(&mut self) {
        if !self.has_canvas() {
            return;
        }
        let now = self.world.resource::<WorldTime>().elapsed;
        let palette = self.world.resource::<Palette>().clone();
        let screen = *self.world.resource::<ScreenSize>();
        self.world
            .resource_scope(|world, mut rng: Mut<RandomSource>| {
                let mut commands = world.commands();
                spawn_rocket(&mut commands, &mut rng, &palette, &screen, now);
            });
        self.world.flush();
    }

    /// Re-initialize for a new surface size: stop, resize the canvas, reseed
    /// the stars, and start again if the engine was running (or waiting for
    /// a surface).
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) {
        let was_enabled = self.is_enabled() || self.resume_on_surface;
        self.stop();
        self.despawn_where::<With<Star>>();

        let screen = ScreenSize::new(width, height, dpr);
        self.world.insert_resource(screen);
        {
            let mut config = self.world.resource_mut::<EngineConfig>();
            config.set_size(width, height);
            config.dpr = dpr;
        }
        let resized = if let Some(mut canvas) = self.world.get_resource_mut::<Canvas>() {
            canvas.resize(width, height, dpr)
        } else if let Some(canvas) = Canvas::new(width, height, dpr) {
            self.world.insert_resource(canvas);
            true
        } else {
            false
        };
        if !resized {
            self.world.remove_resource::<Canvas>();
            self.resume_on_surface = was_enabled;
            warn!("Resized to an empty surface ({}x{}); engine idle", width, height);
            return;
        }
        self.reseed_stars();
        info!("Resized to {}x{} @{}x", width, height, dpr);

        if was_enabled {
            self.start();
        }
    }

    pub fn counts(&mut self) -> PopulationCounts {
        PopulationCounts {
            rockets: self.count::<Rocket>(),
            fragments: self.count::<Fragment>(),
            petals: self.count::<Petal>(),
            butterflies: self.count::<Butterfly>(),
            birds: self.count::<Bird>(),
            fireflies: self.count::<Firefly>(),
            stars: self.count::<Star>(),
            sparkles: self.count::<Sparkle>(),
            timers: self.count::<SpawnTimer>(),
        }
    }

    /// The drawing surface, if the viewport has any pixels.
    pub fn canvas(&self) -> Option<&Canvas> {
        self.world.get_resource::<Canvas>()
    }

    pub fn time(&self) -> WorldTime {
        *self.world.resource::<WorldTime>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn count<T: Component>(&mut self) -> usize {
        self.world
            .query_filtered::<Entity, With<T>>()
            .iter(&self.world)
            .count()
    }

    fn despawn_where<F: bevy_ecs::query::QueryFilter>(&mut self) -> usize {
        let entities: Vec<Entity> = self
            .world
            .query_filtered::<Entity, F>()
            .iter(&self.world)
            .collect();
        for entity in &entities {
            self.world.despawn(*entity);
        }
        entities.len()
    }

    fn reseed_stars(&mut self) {
        if !self.has_canvas() {
            return;
        }
        let screen = *self.world.resource::<ScreenSize>();
        let count = self
            .world
            .resource::<EngineConfig>()
            .star_count(screen.w, screen.h);
        self.world
            .resource_scope(|world, mut rng: Mut<RandomSource>| {
                let mut commands = world.commands();
                seed_stars(&mut commands, &mut rng, &screen, count);
            });
        self.world.flush();
        debug!("Seeded {} stars for {}x{}", count, screen.w, screen.h);
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
    }
}
