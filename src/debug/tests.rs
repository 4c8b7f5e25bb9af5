use bevy::prelude::*;

use super::*;
use crate::rooms::TransitionState;

#[test]
fn test_format_debug_info() {
    let text = format_debug_info(&DebugInfo {
        position: Vec2::new(40.0, 112.0),
        velocity: Vec2::new(200.0, 0.0),
        on_ground: true,
        room_id: "room_1",
        transition: TransitionState::DoorOpening,
    });

    assert!(text.contains("Pos: (40, 112)"));
    assert!(text.contains("Vel: (200, 0)"));
    assert!(text.contains("On ground: true"));
    assert!(text.contains("Room: room_1"));
    assert!(text.contains("Transition: DoorOpening"));
}

#[test]
fn test_debug_state_starts_hidden() {
    assert!(!DebugState::default().show_info);
}
