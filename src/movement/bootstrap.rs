//! Movement domain: player spawn wired to the starting room.

use bevy::prelude::*;

use crate::core::{GameplayConfig, Z_PLAYER, room_transform};
use crate::movement::{
    Collider, Facing, HITBOX_HEIGHT, HITBOX_WIDTH, MovementTuning, Player, RoomPosition, Velocity,
};
use crate::rooms::RoomManager;
use crate::sprites::PlayerAnimation;

/// Copy config speeds into the tuning resource.
pub(crate) fn apply_movement_config(config: Res<GameplayConfig>, mut tuning: ResMut<MovementTuning>) {
    *tuning = MovementTuning::from_config(&config);
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    config: Res<GameplayConfig>,
    rooms: Res<RoomManager>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let size = Vec2::new(HITBOX_WIDTH, HITBOX_HEIGHT);
    let spawn = Vec2::from(config.player_spawn);

    let mut collider = Collider::new(size);
    collider.set_tile_map(rooms.current_tile_map());
    collider.set_blocking_rects(rooms.blocking_rects());
    if collider.tile_map().is_none() {
        warn!(
            "Room '{}' has no tile map, player collides with room bounds only",
            rooms.current_room_id()
        );
    }

    commands.spawn((
        Player,
        RoomPosition(spawn),
        Velocity::default(),
        Facing::default(),
        collider,
        PlayerAnimation::default(),
        Sprite {
            color: PlayerAnimation::default().color(),
            custom_size: Some(size),
            ..default()
        },
        room_transform(spawn, size, Z_PLAYER),
    ));

    info!(
        "Spawned player at ({:.0}, {:.0}) in '{}'",
        spawn.x,
        spawn.y,
        rooms.current_room_id()
    );
}
