//! Doors domain: tests for alignment, animation, and arrival placement.

use bevy::math::Vec2;

use super::*;

fn left_door() -> Door {
    Door::new(
        "room1_door_right",
        DoorSide::LeftOpening,
        Vec2::new(296.0, 112.0),
        "room_2",
        "room2_door_left",
    )
}

fn right_door() -> Door {
    Door::new(
        "room2_door_left",
        DoorSide::RightOpening,
        Vec2::new(0.0, 112.0),
        "room_1",
        "room1_door_right",
    )
}

/// Run the opening animation to completion, returning how many updates
/// reported completion.
fn run_open(door: &mut Door) -> usize {
    door.start_opening();
    (0..FRAME_COUNT * 3)
        .filter(|_| door.update(FRAME_DURATION))
        .count()
}

// -----------------------------------------------------------------------------
// Alignment tests
// -----------------------------------------------------------------------------

#[test]
fn test_left_opening_aligned_when_flush() {
    let door = left_door();
    assert!(door.is_aligned(Vec2::new(272.0, 112.0), 24.0, 24.0));
    // Within the edge epsilon on either side.
    assert!(door.is_aligned(Vec2::new(270.5, 112.0), 24.0, 24.0));
    assert!(door.is_aligned(Vec2::new(274.5, 113.5), 24.0, 24.0));
}

#[test]
fn test_left_opening_not_aligned_when_far_or_offset() {
    let door = left_door();
    assert!(!door.is_aligned(Vec2::new(269.0, 112.0), 24.0, 24.0));
    assert!(!door.is_aligned(Vec2::new(272.0, 109.0), 24.0, 24.0));
    assert!(!door.is_aligned(Vec2::new(272.0, 115.0), 24.0, 24.0));
}

#[test]
fn test_right_opening_checks_left_edge() {
    let door = right_door();
    assert!(door.is_aligned(Vec2::new(24.0, 112.0), 24.0, 24.0));
    assert!(door.is_aligned(Vec2::new(26.0, 112.0), 24.0, 24.0));
    // The left-opening edge means nothing for a right-opening door.
    assert!(!door.is_aligned(Vec2::new(-24.0, 112.0), 24.0, 24.0));
}

#[test]
fn test_alignment_compares_top_left_rows() {
    let door = left_door();
    // Same top row, shorter actor.
    assert!(door.is_aligned(Vec2::new(280.0, 112.0), 16.0, 16.0));
    // A 16px actor standing on the door's floor sits 8px lower.
    assert!(!door.is_aligned(Vec2::new(280.0, 120.0), 16.0, 16.0));
}

#[test]
fn test_only_closed_doors_align() {
    let mut door = left_door();
    let flush = Vec2::new(272.0, 112.0);

    door.start_opening();
    assert!(!door.is_aligned(flush, 24.0, 24.0));

    run_open(&mut door);
    assert!(!door.is_aligned(flush, 24.0, 24.0));

    door.reset();
    assert!(door.is_aligned(flush, 24.0, 24.0));
}

// -----------------------------------------------------------------------------
// Animation tests
// -----------------------------------------------------------------------------

#[test]
fn test_update_is_noop_when_closed() {
    let mut door = left_door();
    assert!(!door.update(1.0));
    assert_eq!(door.state(), DoorState::Closed);
    assert_eq!(door.current_frame(), 0);
}

#[test]
fn test_completion_reported_exactly_once() {
    let mut door = left_door();
    assert_eq!(run_open(&mut door), 1);
    assert_eq!(door.state(), DoorState::Open);
    assert_eq!(door.current_frame(), FRAME_COUNT - 1);

    // Open is terminal for update.
    assert!(!door.update(FRAME_DURATION));
    assert_eq!(door.current_frame(), FRAME_COUNT - 1);
}

#[test]
fn test_frames_advance_on_frame_duration() {
    let mut door = left_door();
    door.start_opening();

    assert!(!door.update(0.1));
    assert_eq!(door.current_frame(), 0);
    assert!(!door.update(0.1));
    assert_eq!(door.current_frame(), 1);

    // One frame per call even when the step covers several durations.
    assert!(!door.update(1.0));
    assert_eq!(door.current_frame(), 2);
}

#[test]
fn test_start_opening_ignored_unless_closed() {
    let mut door = left_door();
    door.start_opening();
    door.update(FRAME_DURATION);
    assert_eq!(door.current_frame(), 1);

    door.start_opening();
    assert_eq!(door.current_frame(), 1);
    assert_eq!(door.state(), DoorState::Opening);
}

#[test]
fn test_reset_returns_to_closed_frame_zero() {
    let mut door = left_door();
    run_open(&mut door);
    door.reset();
    assert_eq!(door.state(), DoorState::Closed);
    assert_eq!(door.current_frame(), 0);
    assert_eq!(door.current_source_rect(), frame_source_rect(0));
}

#[test]
fn test_source_rect_follows_frame() {
    let mut door = left_door();
    run_open(&mut door);
    let rect = door.current_source_rect();
    assert_eq!(rect.min.x, 144);
    assert_eq!(rect.width(), SPRITE_FRAME_SIZE);
    assert!((door.progress() - 1.0).abs() < f32::EPSILON);
}

// -----------------------------------------------------------------------------
// Arrival tests
// -----------------------------------------------------------------------------

#[test]
fn test_arrival_positions() {
    assert_eq!(left_door().arrival_position(24.0), Vec2::new(267.0, 112.0));
    assert_eq!(right_door().arrival_position(24.0), Vec2::new(29.0, 112.0));
}

#[test]
fn test_arrival_does_not_retrigger() {
    for door in [left_door(), right_door()] {
        let arrival = door.arrival_position(24.0);
        assert!(!door.is_aligned(arrival, 24.0, 24.0), "door {}", door.id);
    }
}

#[test]
fn test_arrival_is_one_step_from_aligned() {
    // Walking back toward the door by the margin lines the actor up again.
    let door = left_door();
    let arrival = door.arrival_position(24.0);
    assert!(door.is_aligned(arrival + Vec2::new(ARRIVAL_MARGIN, 0.0), 24.0, 24.0));

    let door = right_door();
    let arrival = door.arrival_position(24.0);
    assert!(door.is_aligned(arrival - Vec2::new(ARRIVAL_MARGIN, 0.0), 24.0, 24.0));
}

#[test]
fn test_bounds_match_footprint() {
    let bounds = left_door().bounds();
    assert_eq!(bounds.min, Vec2::new(296.0, 112.0));
    assert_eq!(bounds.max, Vec2::new(320.0, 136.0));
}
