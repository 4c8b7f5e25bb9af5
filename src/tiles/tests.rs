//! Tiles domain: tests for classification and grid access.

use super::*;

// -----------------------------------------------------------------------------
// Classification tests
// -----------------------------------------------------------------------------

#[test]
fn test_classification_table() {
    let expected = |id: TileId| match id {
        0..=15 => TileType::Solid,
        16..=23 => TileType::Platform,
        24..=31 => TileType::Empty,
        32..=34 => TileType::Ladder,
        35 | 37 => TileType::Deadly,
        _ => TileType::Decoration,
    };

    for id in 0..=u8::MAX {
        assert_eq!(TileType::from_id(id), expected(id), "tile id {id}");
    }
}

#[test]
fn test_classification_is_pure() {
    for id in 0..=u8::MAX {
        assert_eq!(TileType::from_id(id), TileType::from_id(id));
    }
}

#[test]
fn test_blocking_matches_solid_or_platform() {
    for id in 0..=u8::MAX {
        let ty = TileType::from_id(id);
        assert_eq!(
            ty.is_blocking(),
            matches!(ty, TileType::Solid | TileType::Platform)
        );
    }
    assert!(TileType::from_id(PLATFORM_LIGHT).is_blocking());
    assert!(!TileType::from_id(LADDER_YELLOW).is_blocking());
    assert!(!TileType::from_id(HAZARD_RED).is_blocking());
}

#[test]
fn test_row_four_specials() {
    assert!(is_ladder(LADDER_GREEN));
    assert!(is_deadly(POISON_PURPLE));
    assert!(is_empty(WATER_BLUE));
    assert!(is_empty(WARNING_YELLOW));
    assert!(is_empty(ICE_CYAN));
    assert!(is_empty(DECO_BRICK));
    assert!(is_empty(EMPTY));
    assert!(is_solid(WALL_DARK_GRAY));
    assert!(is_platform(PLATFORM_DARK));
}

#[test]
fn test_tile_source_rect() {
    let rect = tile_source_rect(FLOOR_TAN);
    assert_eq!((rect.min.x, rect.min.y), (0, 8));
    assert_eq!((rect.max.x, rect.max.y), (8, 16));

    let last = tile_source_rect(SPECIAL_SILVER);
    assert_eq!((last.min.x, last.min.y), (56, 56));
}

// -----------------------------------------------------------------------------
// TileGrid tests
// -----------------------------------------------------------------------------

#[test]
fn test_new_grid_is_empty() {
    let grid = TileGrid::new(40, 18);
    assert_eq!(grid.width(), 40);
    assert_eq!(grid.height(), 18);
    assert_eq!(grid.pixel_size(), (320, 144));
    assert!(grid.iter().all(|(_, _, id)| id == EMPTY));
}

#[test]
fn test_get_set_in_range() {
    let mut grid = TileGrid::new(4, 3);
    grid.set(3, 2, WALL_BROWN_BRICK);
    assert_eq!(grid.get(3, 2), WALL_BROWN_BRICK);
    assert!(grid.is_blocking(3, 2));
    assert_eq!(grid.tile_type(0, 0), TileType::Empty);
}

#[test]
fn test_out_of_range_get_returns_empty() {
    let mut grid = TileGrid::new(4, 3);
    grid.fill_rect(0, 0, 4, 3, WALL_DARK_GRAY);

    for (col, row) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MIN, i32::MAX), (100, 100)] {
        assert_eq!(grid.get(col, row), EMPTY);
        assert!(!grid.is_blocking(col, row));
    }
}

#[test]
fn test_out_of_range_set_is_noop() {
    let mut grid = TileGrid::new(4, 3);
    let before = grid.clone();

    for (col, row) in [(-1, 0), (0, -1), (4, 0), (0, 3), (-5, -5), (i32::MAX, 1)] {
        grid.set(col, row, WALL_DARK_GRAY);
    }

    assert_eq!(grid, before);
}

#[test]
fn test_tile_at_position() {
    let mut grid = TileGrid::new(40, 18);
    grid.set(2, 17, FLOOR_TAN);
    assert_eq!(grid.tile_at_position(16.0, 136.0), FLOOR_TAN);
    assert_eq!(grid.tile_at_position(23.9, 143.9), FLOOR_TAN);
    assert_eq!(grid.tile_at_position(24.0, 136.0), EMPTY);
    assert_eq!(grid.tile_at_position(-0.5, 136.0), EMPTY);
}

#[test]
fn test_bulk_helpers() {
    let mut grid = TileGrid::new(10, 10);
    grid.draw_rect_outline(1, 1, 4, 3, WALL_MEDIUM_GRAY);

    let walls: Vec<(i32, i32)> = grid
        .iter()
        .filter(|&(_, _, id)| id == WALL_MEDIUM_GRAY)
        .map(|(c, r, _)| (c, r))
        .collect();
    // 4 + 4 along top and bottom, plus 1 interior cell on each side.
    assert_eq!(walls.len(), 10);
    assert_eq!(grid.get(2, 2), EMPTY);

    grid.draw_horizontal_line(8, 5, 5, FLOOR_BROWN);
    assert_eq!(grid.get(8, 5), FLOOR_BROWN);
    assert_eq!(grid.get(9, 5), FLOOR_BROWN);

    grid.draw_vertical_line(0, 7, 2, PLATFORM_MEDIUM);
    assert_eq!(grid.get(0, 7), PLATFORM_MEDIUM);
    assert_eq!(grid.get(0, 8), PLATFORM_MEDIUM);
    assert_eq!(grid.get(0, 9), EMPTY);
}

#[test]
fn test_load_tiles_checks_dimensions() {
    let mut grid = TileGrid::new(3, 2);
    let rows = vec![vec![WALL_DARK_GRAY, EMPTY, EMPTY], vec![EMPTY, EMPTY, BG_DARK]];
    assert!(grid.load_tiles(&rows).is_ok());
    assert_eq!(grid.get(0, 0), WALL_DARK_GRAY);
    assert_eq!(grid.get(2, 1), BG_DARK);

    let err = grid
        .load_tiles(&[vec![EMPTY, EMPTY], vec![EMPTY, EMPTY]])
        .unwrap_err();
    assert_eq!(err.expected_width, 3);
    assert_eq!(err.actual_width, 2);
    // Failed load leaves the grid unchanged.
    assert_eq!(grid.get(0, 0), WALL_DARK_GRAY);
}
