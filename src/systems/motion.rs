//! Per-frame motion systems.
//!
//! All motion is expressed per frame: the engine is stepped once per display
//! refresh and no velocity is scaled by `WorldTime::delta`.
//!
//! Within a frame the systems run in this order:
//!
//! 1. [`oscillator_system`] – advance every phase (stars, butterflies, birds, fireflies)
//! 2. [`movement_system`] – apply gravity then integrate position
//! 3. population-specific path offsets ([`petal_drift_system`],
//!    [`butterfly_flutter_system`], [`bird_glide_system`], [`firefly_hover_system`])
//! 4. [`spin_system`] – advance rotations
//!
//! Petals read their rotation before it is spun, while butterflies, birds
//! and fireflies read their phase after it is advanced.

use bevy_ecs::prelude::*;

use crate::components::bird::Bird;
use crate::components::butterfly::Butterfly;
use crate::components::firefly::Firefly;
use crate::components::mapposition::MapPosition;
use crate::components::oscillator::Oscillator;
use crate::components::petal::Petal;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;

pub fn oscillator_system(mut query: Query<&mut Oscillator>) {
    for mut osc in query.iter_mut() {
        osc.advance();
    }
}

/// Apply gravity to velocity, then add velocity to position.
pub fn movement_system(mut query: Query<(&mut MapPosition, &mut RigidBody)>) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        let delta = rigidbody.step();
        position.pos += delta;
    }
}

/// Petals sway sideways with the sine of their rotation.
pub fn petal_drift_system(mut query: Query<(&mut MapPosition, &Rotation), With<Petal>>) {
    for (mut position, rotation) in query.iter_mut() {
        position.pos.x += rotation.radians.sin() * 0.2;
    }
}

/// Butterflies bob on a sine path scaled by their amplitude.
pub fn butterfly_flutter_system(
    mut query: Query<(&mut MapPosition, &Oscillator, &Butterfly)>,
) {
    for (mut position, osc, butterfly) in query.iter_mut() {
        position.pos.y += osc.sin() * (butterfly.amplitude / 10.0);
    }
}

pub fn bird_glide_system(mut query: Query<(&mut MapPosition, &Oscillator), With<Bird>>) {
    for (mut position, osc) in query.iter_mut() {
        position.pos.y += (osc.phase * 0.6).sin() * 0.4;
    }
}

pub fn firefly_hover_system(mut query: Query<(&mut MapPosition, &Oscillator), With<Firefly>>) {
    for (mut position, osc) in query.iter_mut() {
        position.pos.y += osc.sin() * 0.1;
    }
}

pub fn spin_system(mut query: Query<&mut Rotation>) {
    for mut rotation in query.iter_mut() {
        rotation.radians += rotation.spin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn run<M>(
        world: &mut World,
        system: impl IntoScheduleConfigs<bevy_ecs::system::ScheduleSystem, M>,
    ) {
        let mut schedule = Schedule::default();
        schedule.add_systems(system);
        schedule.run(world);
    }

    #[test]
    fn test_movement_applies_gravity_before_integrating() {
        let mut world = World::new();
        let e = world
            .spawn((
                MapPosition::new(0.0, 100.0),
                RigidBody::new(1.0, -2.0).with_gravity(0.5),
            ))
            .id();
        run(&mut world, movement_system);
        let pos = world.get::<MapPosition>(e).unwrap().pos;
        assert!((pos - Vec2::new(1.0, 98.5)).length() < EPSILON);
    }

    #[test]
    fn test_petal_drift_uses_unspun_rotation() {
        let mut world = World::new();
        let e = world
            .spawn((
                Petal {
                    size: 10.0,
                    hue: 340.0,
                },
                MapPosition::new(0.0, 0.0),
                RigidBody::new(0.1, 1.2),
                Rotation::new(FRAC_PI_2, 1.0),
            ))
            .id();
        run(&mut world, (movement_system, petal_drift_system, spin_system).chain());
        let pos = world.get::<MapPosition>(e).unwrap().pos;
        assert!((pos.x - 0.3).abs() < EPSILON);
        assert!((pos.y - 1.2).abs() < EPSILON);
        let rot = world.get::<Rotation>(e).unwrap();
        assert!((rot.radians - (FRAC_PI_2 + 1.0)).abs() < EPSILON);
    }

    #[test]
    fn test_butterfly_uses_advanced_phase() {
        let mut world = World::new();
        let e = world
            .spawn((
                Butterfly { amplitude: 20.0 },
                MapPosition::new(-20.0, 100.0),
                RigidBody::new(1.5, 0.0),
                Oscillator::new(FRAC_PI_2 - 0.12, 0.12),
            ))
            .id();
        run(
            &mut world,
            (oscillator_system, movement_system, butterfly_flutter_system).chain(),
        );
        let pos = world.get::<MapPosition>(e).unwrap().pos;
        assert!((pos - Vec2::new(-18.5, 102.0)).length() < EPSILON);
    }

    #[test]
    fn test_firefly_and_bird_offsets_only_touch_their_population() {
        let mut world = World::new();
        let firefly = world
            .spawn((
                Firefly,
                MapPosition::new(0.0, 0.0),
                Oscillator::new(FRAC_PI_2, 0.0),
            ))
            .id();
        let other = world
            .spawn((MapPosition::new(0.0, 0.0), Oscillator::new(FRAC_PI_2, 0.0)))
            .id();
        run(&mut world, (firefly_hover_system, bird_glide_system));
        assert!((world.get::<MapPosition>(firefly).unwrap().pos.y - 0.1).abs() < EPSILON);
        assert_eq!(world.get::<MapPosition>(other).unwrap().pos.y, 0.0);
    }
}
