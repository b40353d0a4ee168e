//! Spawn helpers for every population.
//!
//! These functions only queue entity creation on a [`Commands`] buffer, so
//! they can be called from systems, observers, and from
//! [`Engine`](crate::engine::Engine) through `World::commands`. All random
//! parameters come from the shared [`RandomSource`] so a seeded engine is
//! reproducible.
//!
//! Coordinates are logical pixels with y growing downward; velocities are in
//! pixels per frame; times are world seconds.

use bevy_ecs::prelude::*;
use log::trace;
use std::f32::consts::TAU;

use crate::components::bird::Bird;
use crate::components::butterfly::Butterfly;
use crate::components::cull::OffscreenCull;
use crate::components::firefly::Firefly;
use crate::components::fragment::{Fragment, FragmentShape};
use crate::components::lifetime::Lifetime;
use crate::components::mapposition::MapPosition;
use crate::components::oscillator::Oscillator;
use crate::components::persistent::Persistent;
use crate::components::petal::Petal;
use crate::components::rigidbody::{FRAGMENT_GRAVITY, RigidBody, ROCKET_GRAVITY};
use crate::components::rocket::Rocket;
use crate::components::rotation::Rotation;
use crate::components::sparkle::Sparkle;
use crate::components::star::Star;
use crate::components::tint::Tint;
use crate::resources::canvas::Color;
use crate::resources::palette::{BIRD_GREY, FIREFLY_YELLOW, Palette, SPARK_GOLD};
use crate::resources::randomsource::RandomSource;
use crate::resources::screensize::ScreenSize;

/// Extra sparks per burst, as a fraction of the primary count.
pub const SPARK_RATIO: f32 = 0.4;

const BUTTERFLY_PHASE_RATE: f32 = 0.12;
const BIRD_FLAP_RATE: f32 = 0.2;
const FIREFLY_PHASE_RATE: f32 = 0.08;

/// Number of sparks added to a burst of `count` primaries.
pub fn spark_count(count: usize) -> usize {
    (count as f32 * SPARK_RATIO).floor() as usize
}

fn pick_color(rng: &mut RandomSource, colors: &[Color]) -> Color {
    rng.pick(colors).unwrap_or(Color::WHITE)
}

/// Spawn `count` primary fragments plus `floor(0.4 * count)` sparks at `(cx, cy)`.
///
/// Every fragment is stamped with `now` as its birth time.
pub fn spawn_burst(
    commands: &mut Commands,
    rng: &mut RandomSource,
    palette: &Palette,
    cx: f32,
    cy: f32,
    count: usize,
    now: f32,
) {
    trace!("burst of {} at ({:.1}, {:.1})", count, cx, cy);
    for _ in 0..count {
        let angle = rng.between(0.0, TAU);
        let speed = rng.between(1.5, 5.2);
        let size = rng.between(6.0, 16.0);
        let life = rng.between(1.2, 2.2);
        let color = pick_color(rng, palette.vibrant());
        let rotation = rng.between(0.0, TAU);
        let spin = rng.between(-0.08, 0.08);
        let shape = if rng.chance(0.4) {
            FragmentShape::Star
        } else if rng.chance(0.5) {
            FragmentShape::Heart
        } else {
            FragmentShape::Circle
        };
        commands.spawn((
            Fragment::new(size, shape),
            MapPosition::new(cx, cy),
            RigidBody::new(angle.cos() * speed, angle.sin() * speed - 0.8)
                .with_gravity(FRAGMENT_GRAVITY),
            Rotation::new(rotation, spin),
            Lifetime::new(now, life),
            Tint::new(color),
        ));
    }

    for _ in 0..spark_count(count) {
        let angle = rng.between(0.0, TAU);
        let speed = rng.between(2.5, 6.5);
        let size = rng.between(2.0, 4.0);
        let life = rng.between(0.6, 1.1);
        let color = if rng.chance(0.5) {
            Color::WHITE
        } else {
            SPARK_GOLD
        };
        commands.spawn((
            Fragment::new(size, FragmentShape::Circle),
            MapPosition::new(cx, cy),
            RigidBody::new(angle.cos() * speed, angle.sin() * speed)
                .with_gravity(FRAGMENT_GRAVITY),
            Rotation::new(0.0, 0.0),
            Lifetime::new(now, life),
            Tint::new(color),
        ));
    }
}

/// Launch one rocket from just below the bottom edge.
pub fn spawn_rocket(
    commands: &mut Commands,
    rng: &mut RandomSource,
    palette: &Palette,
    screen: &ScreenSize,
    now: f32,
) -> Entity {
    let x = rng.between(screen.w * 0.1, screen.w * 0.9);
    let vx = rng.between(-0.6, 0.6);
    let vy = rng.between(-9.2, -7.2);
    let color = pick_color(rng, palette.accent());
    let explode_height = rng.between(screen.h * 0.2, screen.h * 0.55);
    trace!("rocket at x={:.1}, explodes at y<={:.1}", x, explode_height);
    commands
        .spawn((
            Rocket {
                explode_height,
                born: now,
            },
            MapPosition::new(x, screen.h + 20.0),
            RigidBody::new(vx, vy).with_gravity(ROCKET_GRAVITY),
            Tint::new(color),
        ))
        .id()
}

/// A petal drifting down from just above the top edge.
pub fn spawn_petal(commands: &mut Commands, rng: &mut RandomSource, screen: &ScreenSize) {
    let size = rng.between(8.0, 16.0);
    let x = rng.between(-40.0, screen.w + 40.0);
    let vx = rng.between(-0.4, 0.6);
    let vy = rng.between(0.8, 1.6);
    let rotation = rng.between(0.0, TAU);
    let spin = rng.between(-0.02, 0.02);
    let hue = rng.between(330.0, 360.0);
    commands.spawn((
        Petal { size, hue },
        MapPosition::new(x, -20.0),
        RigidBody::new(vx, vy),
        Rotation::new(rotation, spin),
        OffscreenCull::Below(40.0),
    ));
}

/// A butterfly entering from the left edge.
pub fn spawn_butterfly(
    commands: &mut Commands,
    rng: &mut RandomSource,
    palette: &Palette,
    screen: &ScreenSize,
) {
    let y = rng.between(screen.h * 0.2, screen.h * 0.6);
    let vx = rng.between(1.0, 1.8);
    let amplitude = rng.between(10.0, 26.0);
    let phase = rng.between(0.0, TAU);
    let color = pick_color(rng, palette.vibrant());
    commands.spawn((
        Butterfly { amplitude },
        MapPosition::new(-20.0, y),
        RigidBody::new(vx, 0.0),
        Oscillator::new(phase, BUTTERFLY_PHASE_RATE),
        Tint::new(color),
        OffscreenCull::PastRight(30.0),
    ));
}

/// A bird entering from the left edge in the upper half.
pub fn spawn_bird(commands: &mut Commands, rng: &mut RandomSource, screen: &ScreenSize) {
    let y = rng.between(screen.h * 0.1, screen.h * 0.5);
    let vx = rng.between(1.4, 2.4);
    let flap = rng.between(0.0, TAU);
    commands.spawn((
        Bird,
        MapPosition::new(-30.0, y),
        RigidBody::new(vx, 0.0),
        Oscillator::new(flap, BIRD_FLAP_RATE),
        Tint::new(BIRD_GREY),
        OffscreenCull::PastRight(40.0),
    ));
}

/// A firefly somewhere in the lower part of the sky.
pub fn spawn_firefly(commands: &mut Commands, rng: &mut RandomSource, screen: &ScreenSize) {
    let x = rng.between(0.0, screen.w);
    let y = rng.between(screen.h * 0.55, screen.h * 0.95);
    let vx = rng.between(-0.3, 0.3);
    let vy = rng.between(-0.15, 0.15);
    let phase = rng.between(0.0, TAU);
    commands.spawn((
        Firefly,
        MapPosition::new(x, y),
        RigidBody::new(vx, vy),
        Oscillator::new(phase, FIREFLY_PHASE_RATE),
        Tint::new(FIREFLY_YELLOW),
        OffscreenCull::AnyEdge(20.0),
    ));
}

/// A short-lived static sparkle in the upper 90% of the sky.
pub fn spawn_sparkle(
    commands: &mut Commands,
    rng: &mut RandomSource,
    screen: &ScreenSize,
    now: f32,
) {
    let x = rng.between(0.0, screen.w);
    let y = rng.between(0.0, screen.h * 0.9);
    let life = rng.between(0.5, 1.3);
    let size = rng.between(0.5, 2.0);
    commands.spawn((
        Sparkle { size },
        MapPosition::new(x, y),
        Lifetime::new(now, life),
    ));
}

/// Seed `count` background stars across the whole surface.
///
/// Stars are [`Persistent`]: they survive the engine being stopped and are
/// only replaced when the surface is resized.
pub fn seed_stars(
    commands: &mut Commands,
    rng: &mut RandomSource,
    screen: &ScreenSize,
    count: usize,
) {
    for _ in 0..count {
        let x = rng.between(0.0, screen.w);
        let y = rng.between(0.0, screen.h);
        let base = rng.between(0.2, 0.8);
        let phase = rng.between(0.0, TAU);
        let size = rng.between(0.6, 1.8);
        commands.spawn((
            Star { base, size },
            MapPosition::new(x, y),
            Oscillator::new(phase, Star::twinkle_rate(base)),
            Persistent,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::system::RunSystemOnce;

    #[test]
    fn test_spark_count() {
        assert_eq!(spark_count(26), 10);
        assert_eq!(spark_count(56), 22);
        assert_eq!(spark_count(2), 0);
    }

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(RandomSource::with_seed(11));
        world.insert_resource(Palette::default());
        world.insert_resource(ScreenSize::new(800, 600, 1.0));
        world
    }

    #[test]
    fn test_burst_spawns_primaries_and_sparks() {
        let mut world = world();
        world
            .run_system_once(
                |mut commands: Commands,
                 mut rng: ResMut<RandomSource>,
                 palette: Res<Palette>| {
                    spawn_burst(&mut commands, &mut rng, &palette, 10.0, 20.0, 30, 4.0);
                },
            )
            .unwrap();
        let mut q = world.query::<(&Fragment, &MapPosition, &Lifetime)>();
        assert_eq!(q.iter(&world).count(), 42);
        for (_, pos, life) in q.iter(&world) {
            assert_eq!(pos.pos.x, 10.0);
            assert_eq!(pos.pos.y, 20.0);
            assert_eq!(life.born, 4.0);
        }
    }

    #[test]
    fn test_rocket_starts_below_surface() {
        let mut world = world();
        world
            .run_system_once(
                |mut commands: Commands,
                 mut rng: ResMut<RandomSource>,
                 palette: Res<Palette>,
                 screen: Res<ScreenSize>| {
                    spawn_rocket(&mut commands, &mut rng, &palette, &screen, 0.0);
                },
            )
            .unwrap();
        let mut q = world.query::<(&Rocket, &MapPosition, &RigidBody, &Tint)>();
        let (rocket, pos, body, tint) = q.single(&world).unwrap();
        assert_eq!(pos.pos.y, 620.0);
        assert!((80.0..=720.0).contains(&pos.pos.x));
        assert!((120.0..=330.0).contains(&rocket.explode_height));
        assert!((-9.2..=-7.2).contains(&body.velocity.y));
        assert!(Palette::default().accent().contains(&tint.color));
    }

    #[test]
    fn test_seeded_stars_are_persistent() {
        let mut world = world();
        world
            .run_system_once(
                |mut commands: Commands,
                 mut rng: ResMut<RandomSource>,
                 screen: Res<ScreenSize>| {
                    seed_stars(&mut commands, &mut rng, &screen, 80);
                },
            )
            .unwrap();
        let mut q = world.query_filtered::<&Star, With<Persistent>>();
        assert_eq!(q.iter(&world).count(), 80);
        for star in q.iter(&world) {
            assert!((0.2..0.8).contains(&star.base));
            assert!((0.6..1.8).contains(&star.size));
        }
    }
}
