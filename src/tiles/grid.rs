//! Tiles domain: the dense tile grid backing a room.

use std::fmt;

use thiserror::Error;

use super::types::{EMPTY, TILE_SIZE, TileId, TileType};

/// A fixed-size grid of tile IDs, stored row-major.
///
/// Out-of-range reads return [`EMPTY`] and out-of-range writes are ignored,
/// so callers never need to bounds-check.
#[derive(Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<TileId>,
}

/// Raised by [`TileGrid::load_tiles`] when the replacement rows do not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "tile data size mismatch: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
)]
pub struct GridSizeMismatch {
    pub expected_width: usize,
    pub expected_height: usize,
    pub actual_width: usize,
    pub actual_height: usize,
}

impl TileGrid {
    /// Create a grid filled with [`EMPTY`]. Negative sizes clamp to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![EMPTY; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Width and height in room pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width * TILE_SIZE, self.height * TILE_SIZE)
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return None;
        }
        Some((row * self.width + col) as usize)
    }

    pub fn get(&self, col: i32, row: i32) -> TileId {
        self.index(col, row)
            .and_then(|i| self.tiles.get(i).copied())
            .unwrap_or(EMPTY)
    }

    pub fn set(&mut self, col: i32, row: i32, id: TileId) {
        if let Some(tile) = self.index(col, row).and_then(|i| self.tiles.get_mut(i)) {
            *tile = id;
        }
    }

    pub fn tile_type(&self, col: i32, row: i32) -> TileType {
        TileType::from_id(self.get(col, row))
    }

    /// Solid and platform tiles both block.
    pub fn is_blocking(&self, col: i32, row: i32) -> bool {
        self.tile_type(col, row).is_blocking()
    }

    /// Tile ID under a room-pixel position.
    pub fn tile_at_position(&self, world_x: f32, world_y: f32) -> TileId {
        let col = (world_x.floor() as i32).div_euclid(TILE_SIZE);
        let row = (world_y.floor() as i32).div_euclid(TILE_SIZE);
        self.get(col, row)
    }

    /// Replace every tile from row-major rows. The grid is left untouched on
    /// a size mismatch.
    pub fn load_tiles(&mut self, rows: &[Vec<TileId>]) -> Result<(), GridSizeMismatch> {
        let actual_height = rows.len();
        let actual_width = rows.first().map_or(0, Vec::len);
        let ragged = rows.iter().any(|r| r.len() != actual_width);
        if ragged || actual_width != self.width as usize || actual_height != self.height as usize
        {
            return Err(GridSizeMismatch {
                expected_width: self.width as usize,
                expected_height: self.height as usize,
                actual_width,
                actual_height,
            });
        }

        self.tiles = rows.iter().flatten().copied().collect();
        Ok(())
    }

    /// Iterate `(col, row, id)` over every cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, TileId)> + '_ {
        let width = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &id)| (i as i32 % width, i as i32 / width, id))
    }

    // -------------------------------------------------------------------------
    // Room construction helpers
    // -------------------------------------------------------------------------

    pub fn fill_rect(&mut self, col: i32, row: i32, width: i32, height: i32, id: TileId) {
        for y in row..row + height {
            for x in col..col + width {
                self.set(x, y, id);
            }
        }
    }

    pub fn draw_horizontal_line(&mut self, col: i32, row: i32, length: i32, id: TileId) {
        self.fill_rect(col, row, length, 1, id);
    }

    pub fn draw_vertical_line(&mut self, col: i32, row: i32, length: i32, id: TileId) {
        self.fill_rect(col, row, 1, length, id);
    }

    pub fn draw_rect_outline(&mut self, col: i32, row: i32, width: i32, height: i32, id: TileId) {
        if width <= 0 || height <= 0 {
            return;
        }
        self.draw_horizontal_line(col, row, width, id);
        self.draw_horizontal_line(col, row + height - 1, width, id);
        self.draw_vertical_line(col, row, height, id);
        self.draw_vertical_line(col + width - 1, row, height, id);
    }
}

impl fmt::Debug for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileGrid")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
