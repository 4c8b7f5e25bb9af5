//! Doors domain: the door trigger and its opening animation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::{
    ALIGN_EDGE_EPSILON, ALIGN_VERTICAL_EPSILON, ARRIVAL_MARGIN, DOOR_HEIGHT, DOOR_WIDTH,
    FRAME_COUNT, FRAME_DURATION, frame_source_rect,
};

/// Which side of the door the player must stand on to open it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum DoorSide {
    /// Approached from the left: the player's right edge meets the door.
    LeftOpening,
    /// Approached from the right: the player's left edge meets the door.
    RightOpening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoorState {
    #[default]
    Closed,
    /// Animation playing; gameplay is frozen meanwhile.
    Opening,
    /// Animation done. Stays open until [`Door::reset`].
    Open,
}

/// A door leading to a named door in another room.
#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub id: String,
    pub side: DoorSide,
    /// Top-left corner in room pixels.
    pub position: Vec2,
    pub target_room: String,
    pub target_door: String,
    state: DoorState,
    current_frame: usize,
    frame_timer: f32,
}

impl Door {
    pub fn new(
        id: impl Into<String>,
        side: DoorSide,
        position: Vec2,
        target_room: impl Into<String>,
        target_door: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            side,
            position,
            target_room: target_room.into(),
            target_door: target_door.into(),
            state: DoorState::Closed,
            current_frame: 0,
            frame_timer: 0.0,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Opening progress in `[0, 1]`, for renderers without sprite sheets.
    pub fn progress(&self) -> f32 {
        self.current_frame as f32 / (FRAME_COUNT - 1) as f32
    }

    /// Footprint used as a blocking rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(
            self.position,
            self.position + Vec2::new(DOOR_WIDTH, DOOR_HEIGHT),
        )
    }

    /// Source rectangle of the current frame in the door sprite sheet.
    pub fn current_source_rect(&self) -> URect {
        frame_source_rect(self.current_frame)
    }

    /// Whether an actor is standing flush against the door's active side.
    /// Only closed doors can be aligned.
    ///
    /// Rows are matched on the top-left corners, so the actor height does
    /// not take part.
    pub fn is_aligned(&self, actor_position: Vec2, actor_width: f32, _actor_height: f32) -> bool {
        if self.state != DoorState::Closed {
            return false;
        }

        if (actor_position.y - self.position.y).abs() > ALIGN_VERTICAL_EPSILON {
            return false;
        }

        match self.side {
            DoorSide::LeftOpening => {
                let actor_right = actor_position.x + actor_width;
                (actor_right - self.position.x).abs() < ALIGN_EDGE_EPSILON
            }
            DoorSide::RightOpening => {
                let door_right = self.position.x + DOOR_WIDTH;
                (actor_position.x - door_right).abs() < ALIGN_EDGE_EPSILON
            }
        }
    }

    pub fn start_opening(&mut self) {
        if self.state != DoorState::Closed {
            return;
        }
        self.state = DoorState::Opening;
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    /// Advance the opening animation by at most one frame.
    ///
    /// Returns `true` only on the call that finishes the animation.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.state != DoorState::Opening {
            return false;
        }

        self.frame_timer += dt;
        if self.frame_timer < FRAME_DURATION {
            return false;
        }

        self.frame_timer -= FRAME_DURATION;
        self.current_frame += 1;
        if self.current_frame >= FRAME_COUNT {
            self.state = DoorState::Open;
            self.current_frame = FRAME_COUNT - 1;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.state = DoorState::Closed;
        self.current_frame = 0;
        self.frame_timer = 0.0;
    }

    /// Where an actor arriving through this door is placed: on the trigger
    /// side, [`ARRIVAL_MARGIN`] clear of the door, level with it.
    pub fn arrival_position(&self, actor_width: f32) -> Vec2 {
        match self.side {
            DoorSide::LeftOpening => Vec2::new(
                self.position.x - actor_width - ARRIVAL_MARGIN,
                self.position.y,
            ),
            DoorSide::RightOpening => Vec2::new(
                self.position.x + DOOR_WIDTH + ARRIVAL_MARGIN,
                self.position.y,
            ),
        }
    }
}
