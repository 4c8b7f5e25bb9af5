//! Rooms domain: built-in room layouts and startup registration.

use std::collections::HashMap;
use std::path::Path;

use bevy::prelude::*;

use crate::core::{DoorDef, GameplayConfig, ROOM_HEIGHT_TILES, ROOM_WIDTH_TILES};
use crate::doors::{Door, DoorSide};
use crate::rooms::error::ConfigurationError;
use crate::rooms::loader::load_collision_grid;
use crate::rooms::manager::{RoomLayout, RoomManager};
use crate::tiles::{
    BG_DARK, DECO_BRICK, FLOOR_BROWN, FLOOR_TAN, LADDER_YELLOW, PLATFORM_MEDIUM, TileGrid,
    WALL_BROWN_BRICK, WALL_MEDIUM_GRAY,
};

pub const ROOM_1: &str = "room_1";
pub const ROOM_2: &str = "room_2";

/// Starting room: a floor, one floating platform and a door on the right wall.
pub fn build_room_1() -> RoomLayout {
    let mut tiles = TileGrid::new(ROOM_WIDTH_TILES, ROOM_HEIGHT_TILES);
    tiles.draw_horizontal_line(0, 17, ROOM_WIDTH_TILES, FLOOR_TAN);
    tiles.draw_horizontal_line(14, 12, 8, PLATFORM_MEDIUM);
    tiles.fill_rect(2, 2, 3, 2, DECO_BRICK);
    tiles.draw_vertical_line(30, 4, 4, BG_DARK);

    RoomLayout {
        tiles,
        doors: vec![Door::new(
            "room1_door_right",
            DoorSide::LeftOpening,
            Vec2::new(296.0, 112.0),
            ROOM_2,
            "room2_door_left",
        )],
    }
}

/// Second room: a brick floor and a door back to the start on the left wall.
pub fn build_room_2() -> RoomLayout {
    let mut tiles = TileGrid::new(ROOM_WIDTH_TILES, ROOM_HEIGHT_TILES);
    tiles.draw_horizontal_line(0, 17, ROOM_WIDTH_TILES, FLOOR_BROWN);
    tiles.draw_rect_outline(12, 3, 6, 4, WALL_MEDIUM_GRAY);
    tiles.draw_horizontal_line(24, 9, 5, WALL_BROWN_BRICK);
    tiles.draw_vertical_line(34, 10, 7, LADDER_YELLOW);

    RoomLayout {
        tiles,
        doors: vec![Door::new(
            "room2_door_left",
            DoorSide::RightOpening,
            Vec2::new(0.0, 112.0),
            ROOM_1,
            "room1_door_right",
        )],
    }
}

/// Register the built-in rooms and the config's collision rooms, adding any
/// linked doors. Rooms whose grid fails to load are reported and skipped.
pub fn register_rooms(manager: &mut RoomManager, config: &GameplayConfig) {
    let mut links: HashMap<String, Vec<Door>> = HashMap::new();
    for link in &config.door_links {
        links
            .entry(link.room.clone())
            .or_default()
            .push(link.door.to_door());
    }

    let built_in: [(&str, fn() -> RoomLayout); 2] = [(ROOM_1, build_room_1), (ROOM_2, build_room_2)];
    for (room_id, build) in built_in {
        let extra = links.remove(room_id).unwrap_or_default();
        manager.register_room(room_id, move || {
            let mut layout = build();
            layout.doors.extend(extra.iter().cloned());
            layout
        });
    }

    for room in &config.collision_rooms {
        let tiles = match load_collision_grid(Path::new(&room.grid)) {
            Ok(tiles) => tiles,
            Err(e) => {
                error!("Skipping collision room '{}': {e}", room.id);
                continue;
            }
        };
        if manager.has_room(&room.id) {
            warn!("Collision room '{}' replaces an existing room", room.id);
        }

        let mut doors: Vec<Door> = room.doors.iter().map(DoorDef::to_door).collect();
        doors.extend(links.remove(&room.id).unwrap_or_default());
        info!(
            "Registered collision room '{}' from {} with {} door(s)",
            room.id,
            room.grid,
            doors.len()
        );
        manager.register_room(room.id.clone(), move || RoomLayout {
            tiles: tiles.clone(),
            doors: doors.clone(),
        });
    }

    for room_id in links.keys() {
        error!(
            "Door link skipped: {}",
            ConfigurationError::UnknownRoom(room_id.clone())
        );
    }
}

/// Startup system: register rooms, report configuration problems and enter
/// the start room.
pub(crate) fn setup_rooms(config: Res<GameplayConfig>, mut rooms: ResMut<RoomManager>) {
    register_rooms(&mut rooms, &config);

    for problem in rooms.validate() {
        error!("Room configuration error: {problem}");
    }

    if let Err(e) = rooms.load_room(&config.start_room) {
        error!("Cannot start in '{}': {e}; starting in '{}'", config.start_room, ROOM_1);
        if let Err(e) = rooms.load_room(ROOM_1) {
            error!("Cannot load '{}': {e}", ROOM_1);
        }
    }
}
