//! Rooms domain: coloured-quad visuals for the active room's tiles and doors.

use bevy::color::Mix;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{Z_DOORS, Z_TILES, room_transform};
use crate::doors::{DOOR_HEIGHT, DOOR_WIDTH};
use crate::rooms::components::{DoorVisual, RoomVisual};
use crate::rooms::events::RoomEnteredMessage;
use crate::rooms::manager::RoomManager;
use crate::tiles::*;

const DOOR_CLOSED: Srgba = Srgba::rgb(0.55, 0.35, 0.15);
const DOOR_OPEN: Srgba = Srgba::rgb(0.08, 0.06, 0.04);

/// Fill colour for a tile, or `None` for tiles that are not drawn.
pub fn tile_color(id: TileId) -> Option<Color> {
    let color = match id {
        WALL_DARK_GRAY => Color::srgb(0.25, 0.25, 0.28),
        WALL_MEDIUM_GRAY => Color::srgb(0.4, 0.4, 0.43),
        WALL_LIGHT_GRAY => Color::srgb(0.6, 0.6, 0.62),
        WALL_BROWN_BRICK => Color::srgb(0.45, 0.25, 0.15),
        FLOOR_TAN => Color::srgb(0.76, 0.64, 0.45),
        FLOOR_BROWN => Color::srgb(0.5, 0.33, 0.2),
        FLOOR_GRAY_STONE => Color::srgb(0.5, 0.5, 0.5),
        PLATFORM_LIGHT => Color::srgb(0.7, 0.55, 0.35),
        PLATFORM_MEDIUM => Color::srgb(0.55, 0.4, 0.25),
        PLATFORM_DARK => Color::srgb(0.35, 0.25, 0.15),
        BG_DARK => Color::srgb(0.06, 0.06, 0.1),
        LADDER_YELLOW | LADDER_VARIANT => Color::srgb(0.85, 0.75, 0.2),
        LADDER_GREEN => Color::srgb(0.3, 0.7, 0.3),
        HAZARD_RED => Color::srgb(0.8, 0.15, 0.1),
        WATER_BLUE => Color::srgb(0.15, 0.35, 0.8),
        POISON_PURPLE => Color::srgb(0.55, 0.2, 0.65),
        WARNING_YELLOW => Color::srgb(0.95, 0.85, 0.1),
        ICE_CYAN => Color::srgb(0.6, 0.9, 0.95),
        DECO_BRICK => Color::srgb(0.35, 0.18, 0.12),
        SPECIAL_SILVER => Color::srgb(0.8, 0.8, 0.85),
        _ => match TileType::from_id(id) {
            TileType::Empty => return None,
            TileType::Solid => Color::srgb(0.3, 0.3, 0.3),
            TileType::Platform => Color::srgb(0.5, 0.4, 0.3),
            TileType::Ladder => Color::srgb(0.8, 0.7, 0.2),
            TileType::Deadly => Color::srgb(0.8, 0.1, 0.1),
            TileType::Decoration => Color::srgb(0.2, 0.2, 0.25),
        },
    };
    Some(color)
}

/// Door colour for an animation progress in `[0, 1]`.
pub fn door_color(progress: f32) -> Color {
    DOOR_CLOSED.mix(&DOOR_OPEN, progress.clamp(0.0, 1.0)).into()
}

fn spawn_room(commands: &mut Commands, rooms: &RoomManager) {
    let tile_size = Vec2::splat(TILE_SIZE as f32);

    if let Some(grid) = rooms.current_tile_map() {
        for (col, row, id) in grid.iter() {
            let Some(color) = tile_color(id) else {
                continue;
            };
            let top_left = Vec2::new((col * TILE_SIZE) as f32, (row * TILE_SIZE) as f32);
            commands.spawn((
                RoomVisual,
                Sprite {
                    color,
                    custom_size: Some(tile_size),
                    ..default()
                },
                room_transform(top_left, tile_size, Z_TILES),
            ));
        }
    }

    let door_size = Vec2::new(DOOR_WIDTH, DOOR_HEIGHT);
    for (index, door) in rooms.doors().iter().enumerate() {
        commands.spawn((
            RoomVisual,
            DoorVisual(index),
            Sprite {
                color: door_color(door.progress()),
                custom_size: Some(door_size),
                ..default()
            },
            room_transform(door.position, door_size, Z_DOORS),
        ));
    }
}

pub(crate) fn spawn_room_visuals(mut commands: Commands, rooms: Res<RoomManager>) {
    spawn_room(&mut commands, &rooms);
}

pub(crate) fn rebuild_room_visuals(
    mut commands: Commands,
    mut entered: MessageReader<RoomEnteredMessage>,
    rooms: Res<RoomManager>,
    existing: Query<Entity, With<RoomVisual>>,
) {
    if entered.read().last().is_none() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    debug!("Rebuilt visuals for room '{}'", rooms.current_room_id());
    spawn_room(&mut commands, &rooms);
}

pub(crate) fn update_door_visuals(
    rooms: Res<RoomManager>,
    mut doors: Query<(&DoorVisual, &mut Sprite)>,
) {
    for (visual, mut sprite) in &mut doors {
        if let Some(door) = rooms.doors().get(visual.0) {
            sprite.color = door_color(door.progress());
        }
    }
}
