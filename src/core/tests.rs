use super::*;
use crate::doors::DoorSide;
use bevy::prelude::*;

// ----------------------------------------------------------------------------
// Layout
// ----------------------------------------------------------------------------

#[test]
fn test_room_dimensions() {
    assert_eq!(ROOM_WIDTH_PX, 320.0);
    assert_eq!(ROOM_HEIGHT_PX, 144.0);
    assert_eq!(WINDOW_WIDTH, 960.0);
    assert_eq!(WINDOW_HEIGHT, 600.0);
}

#[test]
fn test_room_to_world_flips_y_and_centres() {
    // The whole room maps onto the top part of the window.
    let centre = room_to_world(Vec2::ZERO, Vec2::new(ROOM_WIDTH_PX, ROOM_HEIGHT_PX), 0.0);
    assert_eq!(centre.x, 0.0);
    assert_eq!(centre.y, INFO_PANEL_HEIGHT * RENDER_SCALE * 0.5);

    let top_left_tile = room_to_world(Vec2::ZERO, Vec2::splat(8.0), 1.0);
    let lower_tile = room_to_world(Vec2::new(0.0, 8.0), Vec2::splat(8.0), 1.0);
    assert!(lower_tile.y < top_left_tile.y);
    assert_eq!(top_left_tile.y - lower_tile.y, 8.0 * RENDER_SCALE);
    assert_eq!(top_left_tile.z, 1.0);
}

#[test]
fn test_room_bottom_meets_window_bottom_above_panel() {
    let room = room_to_world(Vec2::ZERO, Vec2::new(ROOM_WIDTH_PX, ROOM_HEIGHT_PX), 0.0);
    let room_bottom = room.y - GAME_AREA_HEIGHT * 0.5;
    let window_bottom = -WINDOW_HEIGHT * 0.5;
    assert_eq!(room_bottom - window_bottom, INFO_PANEL_HEIGHT * RENDER_SCALE);
}

#[test]
fn test_room_transform_scales() {
    let transform = room_transform(Vec2::new(16.0, 16.0), Vec2::splat(8.0), 2.0);
    assert_eq!(transform.scale, Vec3::new(RENDER_SCALE, RENDER_SCALE, 1.0));
    assert_eq!(transform.translation.z, 2.0);
}

// ----------------------------------------------------------------------------
// Pause tracking
// ----------------------------------------------------------------------------

#[test]
fn test_gameplay_paused_sources() {
    let mut paused = GameplayPaused::default();
    assert!(!paused.is_paused());

    paused.pause("door_transition");
    paused.pause("menu");
    paused.unpause("door_transition");
    assert!(paused.is_paused());
    assert!(!paused.is_paused_by("door_transition"));
    assert!(paused.is_paused_by("menu"));

    paused.set("menu", false);
    assert!(!paused.is_paused());
}

// ----------------------------------------------------------------------------
// Config
// ----------------------------------------------------------------------------

#[test]
fn test_default_config_values() {
    let config = GameplayConfig::default();
    assert_eq!(config.speed, 200.0);
    assert_eq!(config.gravity_speed, 120.0);
    assert_eq!(config.start_room, "room_1");
    assert_eq!(Vec2::from(config.player_spawn), Vec2::new(40.0, 96.0));
    assert!(config.show_debug_info);
    assert!(config.collision_rooms.is_empty());
}

#[test]
fn test_parse_partial_config_keeps_defaults() {
    let config = parse_gameplay_config("(speed: 150.0, show_debug_info: false)").unwrap();
    assert_eq!(config.speed, 150.0);
    assert!(!config.show_debug_info);
    assert_eq!(config.gravity_speed, 120.0);
    assert_eq!(config.start_room, "room_1");
}

#[test]
fn test_parse_collision_rooms_and_links() {
    let ron = r#"(
        collision_rooms: [
            (
                id: "room_3",
                grid: "assets/rooms/room_3.json",
                doors: [
                    (
                        id: "room3_door_left",
                        side: RightOpening,
                        x: 0.0,
                        y: 112.0,
                        target_room: "room_2",
                        target_door: "room2_door_right",
                    ),
                ],
            ),
        ],
        door_links: [
            (
                room: "room_2",
                door: (
                    id: "room2_door_right",
                    side: LeftOpening,
                    x: 296.0,
                    y: 112.0,
                    target_room: "room_3",
                    target_door: "room3_door_left",
                ),
            ),
        ],
    )"#;
    let config = parse_gameplay_config(ron).unwrap();
    assert_eq!(config.collision_rooms.len(), 1);
    assert_eq!(config.collision_rooms[0].doors[0].side, DoorSide::RightOpening);
    assert_eq!(config.door_links[0].room, "room_2");

    let door = config.door_links[0].door.to_door();
    assert_eq!(door.id, "room2_door_right");
    assert_eq!(door.position, Vec2::new(296.0, 112.0));
    assert_eq!(door.target_room, "room_3");
}

#[test]
fn test_parse_rejects_malformed_config() {
    assert!(parse_gameplay_config("(speed: \"fast\")").is_err());
}

#[test]
fn test_load_missing_config_is_read_error() {
    let err = load_gameplay_config(std::path::Path::new("assets/data/does_not_exist.ron"))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Read { .. }));
}

#[test]
fn test_shipped_config_parses() {
    let config = parse_gameplay_config(include_str!("../../assets/data/gameplay.ron")).unwrap();
    assert_eq!(config.start_room, "room_1");
    assert_eq!(config.collision_rooms[0].id, "room_3");
    assert_eq!(config.door_links[0].room, "room_2");
}
