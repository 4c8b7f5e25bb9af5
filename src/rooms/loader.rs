//! Rooms domain: collision-grid JSON loading.
//!
//! A collision grid is a minimal room format for rooms drawn from a background
//! image: `{ "width": w, "height": h, "collision": [[0, 1, ...], ...] }`,
//! where 1 is solid and 0 is empty.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::rooms::error::GridLoadError;
use crate::tiles::{EMPTY, TileGrid, TileId, WALL_DARK_GRAY};

#[derive(Debug, Deserialize)]
struct CollisionGridJson {
    width: usize,
    height: usize,
    collision: Vec<Vec<i64>>,
}

/// Parse a collision grid into a tile grid of solid and empty tiles.
pub fn parse_collision_grid(json: &str) -> Result<TileGrid, GridLoadError> {
    let raw: CollisionGridJson = serde_json::from_str(json)?;

    let actual_width = raw.collision.first().map_or(0, Vec::len);
    let ragged = raw.collision.iter().any(|row| row.len() != raw.width);
    if raw.collision.len() != raw.height || ragged {
        return Err(GridLoadError::DimensionMismatch {
            expected_width: raw.width,
            expected_height: raw.height,
            actual_width,
            actual_height: raw.collision.len(),
        });
    }

    let mut rows: Vec<Vec<TileId>> = Vec::with_capacity(raw.height);
    for (row, cells) in raw.collision.iter().enumerate() {
        let tiles = cells
            .iter()
            .enumerate()
            .map(|(col, &value)| match value {
                0 => Ok(EMPTY),
                1 => Ok(WALL_DARK_GRAY),
                _ => Err(GridLoadError::InvalidCell { col, row, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(tiles);
    }

    let mut grid = TileGrid::new(raw.width as i32, raw.height as i32);
    grid.load_tiles(&rows)
        .map_err(|mismatch| GridLoadError::DimensionMismatch {
            expected_width: mismatch.expected_width,
            expected_height: mismatch.expected_height,
            actual_width: mismatch.actual_width,
            actual_height: mismatch.actual_height,
        })?;
    Ok(grid)
}

/// Read and parse a collision grid file.
pub fn load_collision_grid(path: &Path) -> Result<TileGrid, GridLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| GridLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_collision_grid(&contents)
}
