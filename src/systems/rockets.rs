//! Rocket detonation.
//!
//! Runs after movement. A rocket explodes once its vertical velocity is no
//! longer negative (apex) or once it has climbed to its explosion height.
//! It is replaced by exactly one burst of 24 to 43 fragments (plus sparks)
//! at its last position.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rocket::Rocket;
use crate::resources::palette::Palette;
use crate::resources::randomsource::RandomSource;
use crate::resources::worldtime::WorldTime;
use crate::systems::spawn::spawn_burst;

pub fn rocket_detonation_system(
    query: Query<(Entity, &Rocket, &MapPosition, &RigidBody)>,
    mut commands: Commands,
    palette: Res<Palette>,
    time: Res<WorldTime>,
    mut rng: ResMut<RandomSource>,
) {
    for (entity, rocket, position, body) in query.iter() {
        if !rocket.should_explode(position.pos.y, body.velocity.y) {
            continue;
        }
        let count = rng.between(24.0, 44.0).floor() as usize;
        trace!(
            "rocket {:?} detonates at ({:.1}, {:.1}) after {:.2}s",
            entity,
            position.pos.x,
            position.pos.y,
            time.elapsed - rocket.born
        );
        spawn_burst(
            &mut commands,
            &mut rng,
            &palette,
            position.pos.x,
            position.pos.y,
            count,
            time.elapsed,
        );
        commands.entity(entity).try_despawn();
    }
}
