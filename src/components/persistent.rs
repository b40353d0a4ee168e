//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive
//! [`Engine::stop`](crate::engine::Engine::stop). Background stars and the
//! registered observers carry it; everything else (spawn timers and every
//! transient population) is despawned when the engine is disabled.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that survive the engine being stopped.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
