//! Rooms domain: markers for the entities that draw the active room.

use bevy::prelude::*;

/// Marker for everything spawned to draw the current room. Despawned
/// wholesale when the room changes.
#[derive(Component, Debug)]
pub struct RoomVisual;

/// Index of the drawn door in [`RoomManager::doors`](super::RoomManager::doors).
#[derive(Component, Debug)]
pub struct DoorVisual(pub usize);
