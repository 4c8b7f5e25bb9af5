//! Tiles domain: tile IDs, behaviour types, and tileset layout.
//!
//! The tileset is an 8x8 grid of 8x8 pixel tiles. Each tileset row holds one
//! family of tiles, so a tile's behaviour is a pure function of its ID.

use bevy::math::URect;

/// Index into the tileset.
pub type TileId = u8;

/// Tile size in room pixels.
pub const TILE_SIZE: i32 = 8;

/// Tiles per tileset row.
pub const TILES_PER_ROW: u32 = 8;

/// Tiles per tileset column.
pub const TILES_PER_COL: u32 = 8;

/// Total number of tiles in the tileset.
pub const TOTAL_TILES: u32 = TILES_PER_ROW * TILES_PER_COL;

// Row 0: solid walls (0-7)
pub const WALL_DARK_GRAY: TileId = 0;
pub const WALL_MEDIUM_GRAY: TileId = 1;
pub const WALL_LIGHT_GRAY: TileId = 2;
pub const WALL_BROWN_BRICK: TileId = 3;

// Row 1: solid floors (8-15)
pub const FLOOR_TAN: TileId = 8;
pub const FLOOR_BROWN: TileId = 9;
pub const FLOOR_GRAY_STONE: TileId = 12;

// Row 2: platforms (16-23)
pub const PLATFORM_LIGHT: TileId = 16;
pub const PLATFORM_MEDIUM: TileId = 17;
pub const PLATFORM_DARK: TileId = 18;

// Row 3: background / air (24-31)
pub const EMPTY: TileId = 24;
pub const BG_DARK: TileId = 25;

// Row 4: ladders and hazards (32-39)
pub const LADDER_YELLOW: TileId = 32;
pub const LADDER_VARIANT: TileId = 33;
pub const LADDER_GREEN: TileId = 34;
pub const HAZARD_RED: TileId = 35;
pub const WATER_BLUE: TileId = 36;
pub const POISON_PURPLE: TileId = 37;
pub const WARNING_YELLOW: TileId = 38;
pub const ICE_CYAN: TileId = 39;

// Rows 5-7: decoration (40-63)
pub const DECO_BRICK: TileId = 40;
pub const SPECIAL_SILVER: TileId = 63;

/// Behaviour class of a tile for collision and hazards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Empty,
    Solid,
    /// Named for jump-through, but blocks movement like `Solid`.
    Platform,
    Ladder,
    Deadly,
    Decoration,
}

impl TileType {
    /// Classify a tile ID. IDs outside the tileset count as decoration.
    pub fn from_id(id: TileId) -> Self {
        match id {
            0..=15 => TileType::Solid,
            16..=23 => TileType::Platform,
            24..=31 => TileType::Empty,
            LADDER_YELLOW | LADDER_VARIANT | LADDER_GREEN => TileType::Ladder,
            HAZARD_RED | POISON_PURPLE => TileType::Deadly,
            _ => TileType::Decoration,
        }
    }

    /// Whether this type stops actor movement.
    pub fn is_blocking(self) -> bool {
        matches!(self, TileType::Solid | TileType::Platform)
    }
}

pub fn is_solid(id: TileId) -> bool {
    TileType::from_id(id) == TileType::Solid
}

pub fn is_platform(id: TileId) -> bool {
    TileType::from_id(id) == TileType::Platform
}

pub fn is_deadly(id: TileId) -> bool {
    TileType::from_id(id) == TileType::Deadly
}

pub fn is_ladder(id: TileId) -> bool {
    TileType::from_id(id) == TileType::Ladder
}

/// Empty or purely decorative, i.e. nothing happens on contact.
pub fn is_empty(id: TileId) -> bool {
    matches!(
        TileType::from_id(id),
        TileType::Empty | TileType::Decoration
    )
}

/// Source rectangle of a tile inside the tileset image.
pub fn tile_source_rect(id: TileId) -> URect {
    let id = u32::from(id);
    let size = TILE_SIZE as u32;
    let col = id % TILES_PER_ROW;
    let row = id / TILES_PER_ROW;
    URect::new(col * size, row * size, (col + 1) * size, (row + 1) * size)
}
