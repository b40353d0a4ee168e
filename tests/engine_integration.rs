//! Engine lifecycle integration tests: stars, bursts, rockets, culling,
//! lifetimes, big bursts, stop and resize.

use bevy_ecs::prelude::*;

use skyburst::components::cull::OffscreenCull;
use skyburst::components::fragment::{Fragment, FragmentShape};
use skyburst::components::lifetime::Lifetime;
use skyburst::components::mapposition::MapPosition;
use skyburst::components::petal::Petal;
use skyburst::components::rigidbody::{RigidBody, ROCKET_GRAVITY};
use skyburst::components::rocket::Rocket;
use skyburst::components::rotation::Rotation;
use skyburst::components::sparkle::Sparkle;
use skyburst::components::tint::Tint;
use skyburst::engine::{Engine, EngineOptions};
use skyburst::resources::canvas::Color;
use skyburst::resources::engineconfig::EngineConfig;

const EPSILON: f32 = 1e-6;
const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// 800x600 with every random spawn switched off.
fn quiet_config() -> EngineConfig {
    EngineConfig {
        width: 800,
        height: 600,
        initial_rockets: 0,
        rocket_chance: 0.0,
        petal_chance: 0.0,
        butterfly_chance: 0.0,
        bird_chance: 0.0,
        firefly_chance: 0.0,
        sparkle_chance: 0.0,
        auto_burst_interval: 0.0,
        ..EngineConfig::new()
    }
}

fn make_engine(seed: u64) -> Engine {
    Engine::new(EngineOptions::new(quiet_config()).with_seed(seed))
}

fn run_frames(engine: &mut Engine, frames: u32) {
    for _ in 0..frames {
        engine.frame(DT);
    }
}

#[test]
fn star_count_follows_area_and_stays_stable() {
    let mut engine = make_engine(1);
    assert_eq!(engine.counts().stars, 80);
    engine.start();
    run_frames(&mut engine, 120);
    assert_eq!(engine.counts().stars, 80);
}

#[test]
fn burst_spawns_primaries_and_sparks_stamped_now() {
    let mut engine = make_engine(2);
    engine.start();
    run_frames(&mut engine, 10);
    let now = engine.time().elapsed;

    engine.spawn_burst(100.0, 100.0, 26);
    assert_eq!(engine.counts().fragments, 36);

    let world = engine.world_mut();
    let mut q = world.query::<(&Fragment, &MapPosition, &Lifetime)>();
    for (_, position, lifetime) in q.iter(world) {
        assert!(approx_eq(position.pos.x, 100.0));
        assert!(approx_eq(position.pos.y, 100.0));
        assert!(approx_eq(lifetime.born, now));
    }
}

#[test]
fn rocket_explodes_once_at_its_height() {
    let mut engine = make_engine(3);
    engine.start();
    engine.world_mut().spawn((
        Rocket {
            explode_height: 200.0,
            born: 0.0,
        },
        MapPosition::new(400.0, 620.0),
        RigidBody::new(0.0, -8.0).with_gravity(ROCKET_GRAVITY),
        Tint::new(Color::WHITE),
    ));

    let mut frames = 0;
    while engine.counts().rockets > 0 {
        engine.frame(DT);
        frames += 1;
        assert!(frames < 200, "rocket never exploded");
    }

    let fragments = engine.counts().fragments;
    // 24..=43 primaries plus 40% sparks
    assert!((33..=60).contains(&fragments), "{} fragments", fragments);

    let world = engine.world_mut();
    let positions: Vec<MapPosition> = world
        .query_filtered::<&MapPosition, With<Fragment>>()
        .iter(world)
        .copied()
        .collect();
    let first = positions[0];
    assert!(first.pos.y <= 200.0);
    assert!(approx_eq(first.pos.x, 400.0));
    assert!(positions.iter().all(|p| *p == first));
}

#[test]
fn petal_is_removed_below_the_surface() {
    let mut engine = make_engine(4);
    engine.start();
    let petal = engine
        .world_mut()
        .spawn((
            Petal {
                size: 10.0,
                hue: 340.0,
            },
            MapPosition::new(400.0, 639.0),
            RigidBody::new(0.0, 1.5),
            Rotation::new(0.0, 0.0),
            OffscreenCull::Below(40.0),
        ))
        .id();

    engine.frame(DT);
    assert!(engine.world().get_entity(petal).is_err());
    assert_eq!(engine.counts().petals, 0);
}

#[test]
fn fragments_expire_after_their_life() {
    let mut engine = make_engine(5);
    engine.start();
    engine.spawn_burst(400.0, 300.0, 30);
    assert_eq!(engine.counts().fragments, 42);

    // longest life is 2.2s
    run_frames(&mut engine, 140);
    assert_eq!(engine.counts().fragments, 0);
}

#[test]
fn fragment_and_sparkle_removed_on_the_step_after_their_life() {
    // quarter-second steps keep the ages exact
    let step = 0.25;
    let mut engine = make_engine(11);
    engine.start();
    engine.frame(step);
    engine.frame(step);
    let now = engine.time().elapsed;
    assert_eq!(now, 0.5);

    let world = engine.world_mut();
    let fragment = world
        .spawn((
            Fragment::new(8.0, FragmentShape::Circle),
            MapPosition::new(200.0, 200.0),
            RigidBody::new(0.0, 0.0),
            Rotation::default(),
            Lifetime::new(now, 0.5),
            Tint::new(Color::WHITE),
        ))
        .id();
    let sparkle = world
        .spawn((
            Sparkle { size: 1.0 },
            MapPosition::new(300.0, 100.0),
            Lifetime::new(now, 0.5),
        ))
        .id();

    // age 0.25, then exactly 0.5: both still alive
    engine.frame(step);
    engine.frame(step);
    assert!(engine.world().get_entity(fragment).is_ok());
    assert!(engine.world().get_entity(sparkle).is_ok());
    assert_eq!(engine.counts().sparkles, 1);

    // age 0.75 > life
    engine.frame(step);
    assert!(engine.world().get_entity(fragment).is_err());
    assert!(engine.world().get_entity(sparkle).is_err());
    let counts = engine.counts();
    assert_eq!(counts.fragments, 0);
    assert_eq!(counts.sparkles, 0);
}

#[test]
fn stop_clears_everything_but_stars() {
    let config = EngineConfig {
        width: 800,
        height: 600,
        ..EngineConfig::new()
    };
    let mut engine = Engine::new(EngineOptions::new(config).with_seed(6));
    engine.start();
    run_frames(&mut engine, 90);
    engine.big_burst();
    assert!(engine.counts().fragments > 0);

    engine.stop();
    let counts = engine.counts();
    assert_eq!(counts.timers, 0);
    assert_eq!(counts.rockets, 0);
    assert_eq!(counts.fragments, 0);
    assert_eq!(counts.sparkles, 0);
    assert_eq!(counts.stars, 80);

    // two seconds of would-be frames: nothing spawns, nothing is drawn
    run_frames(&mut engine, 120);
    assert_eq!(engine.counts(), counts);
    assert!(engine.canvas().map(|c| c.is_blank()).unwrap_or(false));
}

#[test]
fn big_burst_adds_fragments_and_one_rocket() {
    let mut engine = make_engine(7);
    engine.big_burst();
    assert_eq!(engine.counts().fragments, 0, "ignored while disabled");

    engine.start();
    engine.big_burst();
    let counts = engine.counts();
    assert_eq!(counts.fragments, 56 + 22);
    assert_eq!(counts.rockets, 1);

    let world = engine.world_mut();
    let mut q = world.query_filtered::<&MapPosition, With<Lifetime>>();
    assert!(q.iter(world).all(|p| p.pos.x == 400.0 && p.pos.y == 300.0));
}

#[test]
fn resize_reseeds_stars_and_keeps_running() {
    let mut engine = make_engine(8);
    engine.start();
    engine.spawn_burst(10.0, 10.0, 10);

    engine.resize(1920, 1080, 2.0);
    let counts = engine.counts();
    assert!(engine.is_enabled());
    assert_eq!(counts.stars, 115);
    assert_eq!(counts.fragments, 0);
    assert_eq!(counts.timers, 4);
    let canvas = engine.canvas().expect("canvas after resize");
    assert_eq!(canvas.pixel_size(), (3840, 2160));
    assert_eq!(canvas.dpr(), 2.0);
}

#[test]
fn resize_to_empty_surface_goes_idle_then_resumes() {
    let mut engine = make_engine(9);
    engine.start();
    engine.resize(0, 600, 1.0);
    assert!(!engine.is_enabled());
    assert!(engine.canvas().is_none());
    assert_eq!(engine.counts().stars, 0);
    assert_eq!(engine.counts().timers, 0);

    // minimise then restore
    engine.resize(0, 0, 1.0);
    engine.resize(800, 600, 1.0);
    assert!(engine.canvas().is_some());
    assert!(engine.is_enabled());
    let counts = engine.counts();
    assert_eq!(counts.stars, 80);
    assert_eq!(counts.timers, 4);

    engine.frame(DT);
    assert!(!engine.canvas().map(|c| c.is_blank()).unwrap_or(true));
}

#[test]
fn stopped_engine_stays_stopped_across_resizes() {
    let mut engine = make_engine(12);
    engine.resize(0, 0, 1.0);
    engine.resize(800, 600, 1.0);
    assert!(!engine.is_enabled());
    assert_eq!(engine.counts().timers, 0);
}

#[test]
fn running_engine_draws_something() {
    let mut engine = make_engine(10);
    engine.start();
    engine.frame(DT);
    assert!(!engine.canvas().map(|c| c.is_blank()).unwrap_or(true));
}
