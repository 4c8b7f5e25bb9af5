//! Core domain: window layout, frame scheduling, pause tracking and runtime config.

mod config;
mod layout;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use config::{
    CollisionRoomDef, ConfigLoadError, DoorDef, DoorLinkDef, GAMEPLAY_CONFIG_PATH, GameplayConfig,
    PointDef, load_gameplay_config, parse_gameplay_config,
};
pub use layout::*;
pub use resources::{GameplayPaused, gameplay_active};
pub use systems::{INFO_PANEL_COLOR, InfoPanel};

use bevy::prelude::*;

use crate::core::config::setup_gameplay_config;
use crate::core::systems::{exit_on_escape, setup_camera, spawn_info_panel};

/// Gameplay ticks per second.
pub const FIXED_HZ: f64 = 60.0;

/// Ordering of the per-tick gameplay systems in `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Input sampling and velocity control.
    Control,
    /// Collider stepping.
    Physics,
    /// Door triggers and room transitions.
    Rooms,
    /// Copying simulation state onto render components.
    Sync,
}

/// Ordering of `Startup` work: config first, then rooms, then entities that need both.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum BootSet {
    Config,
    Rooms,
    Spawn,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .insert_resource(ClearColor(Color::BLACK))
            .init_resource::<GameplayConfig>()
            .init_resource::<GameplayPaused>()
            .configure_sets(
                Startup,
                (BootSet::Config, BootSet::Rooms, BootSet::Spawn).chain(),
            )
            .configure_sets(
                FixedUpdate,
                (
                    FrameSet::Control,
                    FrameSet::Physics,
                    FrameSet::Rooms,
                    FrameSet::Sync,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (setup_gameplay_config, setup_camera, spawn_info_panel).in_set(BootSet::Config),
            )
            .add_systems(Update, exit_on_escape);
    }
}
