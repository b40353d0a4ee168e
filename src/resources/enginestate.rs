//! Engine run state resource.
//!
//! The frame schedule only runs while the state is
//! [`EngineStates::Enabled`]; see
//! [`state_is_enabled`](crate::systems::enginestate::state_is_enabled).

use bevy_ecs::prelude::Resource;

/// Discrete states the animation engine can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineStates {
    /// Timers cancelled, nothing drawn. The engine starts here.
    #[default]
    Disabled,
    Enabled,
}

/// Authoritative current engine state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EngineState {
    current: EngineStates,
}

impl EngineState {
    /// Create a new state initialized to [`EngineStates::Disabled`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> EngineStates {
        self.current
    }

    pub fn set(&mut self, state: EngineStates) {
        self.current = state;
    }

    pub fn is_enabled(&self) -> bool {
        self.current == EngineStates::Enabled
    }
}
