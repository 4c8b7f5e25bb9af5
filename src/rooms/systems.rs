//! Rooms domain: door triggers, transition execution and the freeze gate.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::movement::{Collider, HITBOX_WIDTH, Player, RoomPosition, Velocity};
use crate::rooms::events::{DoorOpeningMessage, RoomEnteredMessage};
use crate::rooms::manager::RoomManager;

/// Pause source held while a door transition is in progress.
pub const DOOR_TRANSITION_PAUSE: &str = "door_transition";

pub(crate) fn check_door_triggers(
    mut rooms: ResMut<RoomManager>,
    player: Query<(&RoomPosition, &Collider), With<Player>>,
    mut opening: MessageWriter<DoorOpeningMessage>,
) {
    let Ok((position, collider)) = player.single() else {
        return;
    };

    if !rooms.check_door_triggers(position.0, collider.size.x, collider.size.y) {
        return;
    }
    if let Some(door) = rooms.active_door() {
        opening.write(DoorOpeningMessage {
            door_id: door.id.clone(),
            target_room: door.target_room.clone(),
        });
    }
}

/// Advance the door animation and, once it completes, swap rooms and hand
/// the new room's collision data to the player.
pub(crate) fn advance_transition(
    time: Res<Time>,
    mut rooms: ResMut<RoomManager>,
    mut player: Query<(&mut RoomPosition, &mut Velocity, &mut Collider), With<Player>>,
    mut entered: MessageWriter<RoomEnteredMessage>,
) {
    let frame_before = rooms.active_door().map(|door| door.current_frame());
    let Some(target) = rooms.update(time.delta_secs()) else {
        if let Some(door) = rooms.active_door() {
            if Some(door.current_frame()) != frame_before {
                debug!("Door '{}' frame {}", door.id, door.current_frame());
            }
        }
        return;
    };

    let actor_width = player
        .single()
        .map_or(HITBOX_WIDTH, |(_, _, collider)| collider.size.x);

    let arrival = match rooms.execute_transition(actor_width) {
        Ok(arrival) => arrival,
        Err(e) => {
            error!(
                "Door transition to '{}'/'{}' failed: {e}",
                target.room_id, target.door_id
            );
            return;
        }
    };

    if let Ok((mut position, mut velocity, mut collider)) = player.single_mut() {
        collider.set_tile_map(rooms.current_tile_map());
        collider.set_blocking_rects(rooms.blocking_rects());
        velocity.0 = Vec2::ZERO;
        position.0 = arrival;
    }

    info!(
        "Entered room '{}' at ({:.0}, {:.0})",
        rooms.current_room_id(),
        arrival.x,
        arrival.y
    );
    entered.write(RoomEnteredMessage {
        room_id: rooms.current_room_id().to_string(),
        arrival,
    });
}

/// Mirror the manager's freeze flag into the shared pause resource.
pub(crate) fn sync_gameplay_pause(rooms: Res<RoomManager>, mut paused: ResMut<GameplayPaused>) {
    let frozen = rooms.is_frozen();
    if frozen != paused.is_paused_by(DOOR_TRANSITION_PAUSE) {
        paused.set(DOOR_TRANSITION_PAUSE, frozen);
    }
}
