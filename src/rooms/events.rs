//! Rooms domain: messages for door transitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A door started opening; gameplay freezes until the room changes.
#[derive(Debug)]
pub struct DoorOpeningMessage {
    pub door_id: String,
    pub target_room: String,
}

impl Message for DoorOpeningMessage {}

/// The player arrived in a room, either at startup or through a door.
#[derive(Debug)]
pub struct RoomEnteredMessage {
    pub room_id: String,
    pub arrival: Vec2,
}

impl Message for RoomEnteredMessage {}
