//! Off-surface culling system.
//!
//! Despawns petals, butterflies, birds and fireflies once their
//! [`OffscreenCull`] rule says they have left the surface.

use bevy_ecs::prelude::*;

use crate::components::cull::OffscreenCull;
use crate::components::mapposition::MapPosition;
use crate::resources::screensize::ScreenSize;

pub fn cull_offscreen_system(
    screen: Res<ScreenSize>,
    query: Query<(Entity, &MapPosition, &OffscreenCull)>,
    mut commands: Commands,
) {
    for (entity, position, cull) in query.iter() {
        if cull.is_outside(position.pos, &screen) {
            commands.entity(entity).try_despawn();
        }
    }
}
