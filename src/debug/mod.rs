//! Debug tooling: an F1-toggled overlay with the player's position,
//! velocity, ground contact, current room and transition state.

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::DebugState;
pub use ui::{DebugInfo, DebugInfoOverlay, format_debug_info};

use bevy::prelude::*;

use crate::core::BootSet;
use crate::debug::systems::{apply_debug_config, toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Startup,
                apply_debug_config
                    .after(BootSet::Config)
                    .before(BootSet::Spawn),
            )
            .add_systems(Update, (toggle_debug_info, update_debug_info_overlay).chain());
    }
}
