//! Tiles domain: tile classification and the per-room tile grid.

mod grid;
mod types;

#[cfg(test)]
mod tests;

pub use grid::{GridSizeMismatch, TileGrid};
pub use types::*;
