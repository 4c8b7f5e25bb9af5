//! Core domain: room and window dimensions, and the room-to-screen transform.
//!
//! Gameplay works in room pixels: origin at the room's top-left corner, y
//! pointing down. Bevy's world space is y-up and centred, so everything drawn
//! goes through [`room_to_world`].

use bevy::prelude::*;

use crate::tiles::TILE_SIZE;

pub const ROOM_WIDTH_TILES: i32 = 40;
pub const ROOM_HEIGHT_TILES: i32 = 18;

pub const ROOM_WIDTH_PX: f32 = (ROOM_WIDTH_TILES * TILE_SIZE) as f32;
pub const ROOM_HEIGHT_PX: f32 = (ROOM_HEIGHT_TILES * TILE_SIZE) as f32;

/// Integer upscale from room pixels to screen pixels.
pub const RENDER_SCALE: f32 = 3.0;

/// Height of the HUD strip under the game area, in room pixels.
pub const INFO_PANEL_HEIGHT: f32 = 56.0;

pub const WINDOW_WIDTH: f32 = ROOM_WIDTH_PX * RENDER_SCALE;
pub const GAME_AREA_HEIGHT: f32 = ROOM_HEIGHT_PX * RENDER_SCALE;
pub const WINDOW_HEIGHT: f32 = GAME_AREA_HEIGHT + INFO_PANEL_HEIGHT * RENDER_SCALE;

pub const Z_TILES: f32 = 0.0;
pub const Z_DOORS: f32 = 1.0;
pub const Z_PLAYER: f32 = 2.0;

/// World-space centre of a room-space rectangle given its top-left corner.
///
/// The game area occupies the top of the window with the info panel below,
/// so the room is shifted up by half the panel height.
pub fn room_to_world(top_left: Vec2, size: Vec2, z: f32) -> Vec3 {
    let centre = top_left + size * 0.5;
    let x = (centre.x - ROOM_WIDTH_PX * 0.5) * RENDER_SCALE;
    let y = (ROOM_HEIGHT_PX * 0.5 - centre.y) * RENDER_SCALE + INFO_PANEL_HEIGHT * RENDER_SCALE * 0.5;
    Vec3::new(x, y, z)
}

/// Transform for a room-space quad of `size` whose top-left is `top_left`.
/// Sprites spawned with it should use `custom_size = size`.
pub fn room_transform(top_left: Vec2, size: Vec2, z: f32) -> Transform {
    Transform::from_translation(room_to_world(top_left, size, z))
        .with_scale(Vec3::new(RENDER_SCALE, RENDER_SCALE, 1.0))
}
