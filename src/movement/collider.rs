//! Movement domain: axis-separated motion and collision against tiles and
//! blocking rectangles.
//!
//! Coordinates are room pixels (top-left origin, y down). An actor is an
//! axis-aligned box whose top-left corner is its position.

use std::sync::Arc;

use bevy::prelude::*;

use crate::core::{ROOM_HEIGHT_PX, ROOM_WIDTH_PX};
use crate::tiles::{TILE_SIZE, TileGrid};

/// Player hitbox in room pixels.
pub const HITBOX_WIDTH: f32 = 24.0;
pub const HITBOX_HEIGHT: f32 = 24.0;

/// Moves an actor and resolves it against the active room's collision data.
///
/// The collider holds its own snapshot of the room: a shared handle to the
/// tile grid and a by-value copy of the blocking rectangles. Both are handed
/// in again whenever the room changes, so nothing here can go stale under a
/// room swap.
#[derive(Component, Debug, Clone)]
pub struct Collider {
    pub size: Vec2,
    /// Room extent the actor is clamped to.
    pub bounds: Vec2,
    tile_map: Option<Arc<TileGrid>>,
    blocking_rects: Vec<Rect>,
    on_ground: bool,
}

impl Collider {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            bounds: Vec2::new(ROOM_WIDTH_PX, ROOM_HEIGHT_PX),
            tile_map: None,
            blocking_rects: Vec::new(),
            on_ground: false,
        }
    }

    pub fn with_bounds(mut self, bounds: Vec2) -> Self {
        self.bounds = bounds;
        self
    }

    /// `None` puts the collider in bounds-only mode.
    pub fn set_tile_map(&mut self, tile_map: Option<Arc<TileGrid>>) {
        self.tile_map = tile_map;
    }

    pub fn set_blocking_rects(&mut self, rects: Vec<Rect>) {
        self.blocking_rects = rects;
    }

    pub fn tile_map(&self) -> Option<&TileGrid> {
        self.tile_map.as_deref()
    }

    pub fn blocking_rects(&self) -> &[Rect] {
        &self.blocking_rects
    }

    /// Result of the most recent [`Collider::step`].
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn bounding_box(&self, position: Vec2) -> Rect {
        Rect::from_corners(position, position + self.size)
    }

    /// Advance one frame: integrate and resolve X, then Y, then probe for
    /// ground and clamp to the room.
    ///
    /// The order matters for corners and must not be rearranged. Each axis
    /// resolves using the sign of that axis's velocity at the start of the
    /// step, so a tile hit that zeroes the velocity does not stop a
    /// rectangle on the same axis from also pushing back.
    pub fn step(&mut self, position: &mut Vec2, velocity: &mut Vec2, dt: f32) {
        let dir_x = velocity.x;
        position.x += velocity.x * dt;
        if let Some(grid) = self.tile_map.as_deref() {
            self.resolve_tiles_x(grid, position, velocity, dir_x);
        }
        self.resolve_rects_x(position, velocity, dir_x);

        let dir_y = velocity.y;
        position.y += velocity.y * dt;
        if let Some(grid) = self.tile_map.as_deref() {
            self.resolve_tiles_y(grid, position, velocity, dir_y);
        }
        self.resolve_rects_y(position, velocity, dir_y);

        self.on_ground = self.check_on_ground(*position);

        self.clamp_to_bounds(position, velocity);

        // Without tiles the room floor is the only ground there is.
        if self.tile_map.is_none() && position.y >= self.bounds.y - self.size.y {
            self.on_ground = true;
        }
    }

    // -------------------------------------------------------------------------
    // Tile resolution
    //
    // Scans stop at the first blocking tile along the perpendicular span, not
    // at the most restrictive one.
    // -------------------------------------------------------------------------

    fn resolve_tiles_x(&self, grid: &TileGrid, pos: &mut Vec2, vel: &mut Vec2, dir: f32) {
        let top_row = tile_of(near_pixel(pos.y));
        let bottom_row = tile_of(far_pixel(pos.y + self.size.y));

        if dir > 0.0 {
            let col = tile_of(far_pixel(pos.x + self.size.x));
            if (top_row..=bottom_row).any(|row| grid.is_blocking(col, row)) {
                pos.x = (col * TILE_SIZE) as f32 - self.size.x;
                vel.x = 0.0;
            }
        } else if dir < 0.0 {
            let col = tile_of(near_pixel(pos.x));
            if (top_row..=bottom_row).any(|row| grid.is_blocking(col, row)) {
                pos.x = ((col + 1) * TILE_SIZE) as f32;
                vel.x = 0.0;
            }
        }
    }

    fn resolve_tiles_y(&self, grid: &TileGrid, pos: &mut Vec2, vel: &mut Vec2, dir: f32) {
        let left_col = tile_of(near_pixel(pos.x));
        let right_col = tile_of(far_pixel(pos.x + self.size.x));

        if dir > 0.0 {
            let row = tile_of(far_pixel(pos.y + self.size.y));
            if (left_col..=right_col).any(|col| grid.is_blocking(col, row)) {
                pos.y = (row * TILE_SIZE) as f32 - self.size.y;
                vel.y = 0.0;
            }
        } else if dir < 0.0 {
            let row = tile_of(near_pixel(pos.y));
            if (left_col..=right_col).any(|col| grid.is_blocking(col, row)) {
                pos.y = ((row + 1) * TILE_SIZE) as f32;
                vel.y = 0.0;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Rectangle resolution
    // -------------------------------------------------------------------------

    fn resolve_rects_x(&self, pos: &mut Vec2, vel: &mut Vec2, dir: f32) {
        for rect in &self.blocking_rects {
            if !overlaps(self.bounding_box(*pos), *rect) {
                continue;
            }
            if dir > 0.0 {
                pos.x = rect.min.x - self.size.x;
            } else if dir < 0.0 {
                pos.x = rect.max.x;
            }
            vel.x = 0.0;
        }
    }

    fn resolve_rects_y(&self, pos: &mut Vec2, vel: &mut Vec2, dir: f32) {
        for rect in &self.blocking_rects {
            if !overlaps(self.bounding_box(*pos), *rect) {
                continue;
            }
            if dir > 0.0 {
                pos.y = rect.min.y - self.size.y;
            } else if dir < 0.0 {
                pos.y = rect.max.y;
            }
            vel.y = 0.0;
        }
    }

    // -------------------------------------------------------------------------
    // Ground probe and room bounds
    // -------------------------------------------------------------------------

    fn check_on_ground(&self, pos: Vec2) -> bool {
        let feet = pos.y + self.size.y;

        if let Some(grid) = self.tile_map.as_deref() {
            let row = tile_of(feet.floor() as i32);
            let left_col = tile_of(near_pixel(pos.x));
            let right_col = tile_of(far_pixel(pos.x + self.size.x));
            if (left_col..=right_col).any(|col| grid.is_blocking(col, row)) {
                return true;
            }
        }

        let probe = Rect::new(pos.x, feet, pos.x + self.size.x, feet + 1.0);
        self.blocking_rects.iter().any(|rect| overlaps(probe, *rect))
    }

    fn clamp_to_bounds(&self, pos: &mut Vec2, vel: &mut Vec2) {
        let max = (self.bounds - self.size).max(Vec2::ZERO);

        if pos.x < 0.0 {
            pos.x = 0.0;
            vel.x = 0.0;
        } else if pos.x > max.x {
            pos.x = max.x;
            vel.x = 0.0;
        }

        if pos.y < 0.0 {
            pos.y = 0.0;
            vel.y = 0.0;
        } else if pos.y > max.y {
            pos.y = max.y;
            vel.y = 0.0;
        }
    }
}

/// Strict overlap: boxes that only share an edge do not intersect.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

/// Pixel column/row holding a box's leading (left/top) edge.
fn near_pixel(edge: f32) -> i32 {
    edge.floor() as i32
}

/// Last pixel column/row a box with trailing edge `edge` reaches into.
/// Any positive overlap counts; an edge exactly on a boundary stays short
/// of the next pixel.
fn far_pixel(edge: f32) -> i32 {
    edge.ceil() as i32 - 1
}

fn tile_of(pixel: i32) -> i32 {
    pixel.div_euclid(TILE_SIZE)
}
