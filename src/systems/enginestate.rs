use crate::resources::enginestate::EngineState;
use bevy_ecs::prelude::*;

/// Run condition: the frame schedule only runs while the engine is enabled.
pub fn state_is_enabled(state: Res<EngineState>) -> bool {
    state.is_enabled()
}
