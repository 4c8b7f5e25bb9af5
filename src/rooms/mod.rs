//! Rooms domain: the active room, door transitions, room registry and visuals.

mod components;
mod error;
mod events;
mod loader;
mod manager;
mod registry;
mod spawn;
mod systems;


pub use error::{ConfigurationError, GridLoadError, RoomError};
pub use events::{DoorOpeningMessage, RoomEnteredMessage};
pub use loader::{load_collision_grid, parse_collision_grid};
pub use manager::{DoorTarget, RoomBuilder, RoomLayout, RoomManager, TransitionState};
pub use registry::{ROOM_1, ROOM_2, build_room_1, build_room_2, register_rooms};
pub use spawn::{door_color, tile_color};
pub use systems::DOOR_TRANSITION_PAUSE;

use bevy::prelude::*;

use crate::core::{BootSet, FrameSet};
use crate::rooms::registry::setup_rooms;
use crate::rooms::spawn::{rebuild_room_visuals, spawn_room_visuals, update_door_visuals};
use crate::rooms::systems::{advance_transition, check_door_triggers, sync_gameplay_pause};

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RoomManager>()
            .add_message::<DoorOpeningMessage>()
            .add_message::<RoomEnteredMessage>()
            .add_systems(Startup, setup_rooms.in_set(BootSet::Rooms))
            .add_systems(Startup, spawn_room_visuals.in_set(BootSet::Spawn))
            .add_systems(
                FixedUpdate,
                (check_door_triggers, advance_transition, sync_gameplay_pause)
                    .chain()
                    .in_set(FrameSet::Rooms),
            )
            .add_systems(
                Update,
                (rebuild_room_visuals, update_door_visuals).chain(),
            );
    }
}
