//! Debug domain: overlay visibility state.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay (position, velocity, room) is shown
    pub show_info: bool,
}
