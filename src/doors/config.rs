//! Doors domain: door dimensions, timing, and sprite frame layout.

use bevy::math::{URect, Vec2};

/// Door footprint in room pixels, same as the player hitbox.
pub const DOOR_WIDTH: f32 = 24.0;
pub const DOOR_HEIGHT: f32 = 24.0;

/// Size of one frame cell in the door sprite sheets.
pub const SPRITE_FRAME_SIZE: u32 = 48;

/// Seconds per door animation frame.
pub const FRAME_DURATION: f32 = 0.15;
pub const FRAME_COUNT: usize = 4;

/// Maximum difference between actor and door bottoms to count as level.
pub const ALIGN_VERTICAL_EPSILON: f32 = 2.0;

/// Actor edge must be strictly closer than this to the door edge.
pub const ALIGN_EDGE_EPSILON: f32 = 3.0;

/// Gap left between an arriving actor and the door. Larger than
/// [`ALIGN_EDGE_EPSILON`] so arrival never re-triggers the door.
pub const ARRIVAL_MARGIN: f32 = 5.0;

/// Arrival point used when a transition's target door cannot be found.
pub const FALLBACK_ARRIVAL: Vec2 = Vec2::new(160.0, 60.0);

/// Source rectangle of an animation frame. Frames sit left to right in a
/// single row.
pub fn frame_source_rect(frame: usize) -> URect {
    let frame = frame.min(FRAME_COUNT - 1) as u32;
    URect::new(
        frame * SPRITE_FRAME_SIZE,
        0,
        (frame + 1) * SPRITE_FRAME_SIZE,
        SPRITE_FRAME_SIZE,
    )
}
