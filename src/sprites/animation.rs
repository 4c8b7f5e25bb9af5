//! Animation state machine and playback for the player.
//!
//! The state is picked from velocity each tick; frames then advance on a
//! per-state timer. Frame source rectangles index a 24x24 sprite strip, and
//! the quad renderer tints by state instead.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Sprite cell size on the player strip.
pub const SPRITE_SIZE: u32 = 24;

/// Speeds below this (px/s) count as standing still.
pub const VELOCITY_THRESHOLD: f32 = 10.0;

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAnimState {
    #[default]
    Idle,
    FlyingLeft,
    FlyingRight,
    FlyingUp,
    Falling,
}

/// Frames of one state on the sprite strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Index of the first cell on the strip.
    pub first_cell: u32,
    pub frame_count: usize,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl PlayerAnimState {
    /// Choose a state from velocity. Horizontal motion wins over vertical;
    /// rising only counts while thrusting, and falling needs three times
    /// the threshold so gentle drift still reads as idle.
    pub fn from_motion(velocity: Vec2, thrusting: bool) -> Self {
        if velocity.x > VELOCITY_THRESHOLD {
            Self::FlyingRight
        } else if velocity.x < -VELOCITY_THRESHOLD {
            Self::FlyingLeft
        } else if thrusting && velocity.y < -VELOCITY_THRESHOLD {
            Self::FlyingUp
        } else if velocity.y > VELOCITY_THRESHOLD * 3.0 {
            Self::Falling
        } else {
            Self::Idle
        }
    }

    pub fn clip(self) -> AnimationClip {
        match self {
            Self::Idle => AnimationClip {
                first_cell: 0,
                frame_count: 4,
                frame_duration: 0.117,
            },
            // Left reuses the right-facing frames, flipped.
            Self::FlyingLeft | Self::FlyingRight => AnimationClip {
                first_cell: 4,
                frame_count: 4,
                frame_duration: 0.1,
            },
            Self::FlyingUp => AnimationClip {
                first_cell: 8,
                frame_count: 2,
                frame_duration: 0.08,
            },
            Self::Falling => AnimationClip {
                first_cell: 10,
                frame_count: 2,
                frame_duration: 0.1,
            },
        }
    }

    pub fn flip_x(self) -> bool {
        self == Self::FlyingLeft
    }

    fn base_color(self) -> Srgba {
        match self {
            Self::Idle => Srgba::rgb(0.95, 0.85, 0.2),
            Self::FlyingLeft | Self::FlyingRight => Srgba::rgb(1.0, 0.7, 0.15),
            Self::FlyingUp => Srgba::rgb(1.0, 0.95, 0.55),
            Self::Falling => Srgba::rgb(0.8, 0.6, 0.1),
        }
    }
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug, Default)]
pub struct PlayerAnimation {
    pub state: PlayerAnimState,
    /// Current frame index within the state's clip (0-based).
    pub current_frame: usize,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
}

impl PlayerAnimation {
    /// Switch state, restarting the clip only when the state changes.
    /// Returns whether it changed.
    pub fn set_state(&mut self, state: PlayerAnimState) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        true
    }

    /// Advance by `dt`, looping. May skip several frames on a long `dt`.
    pub fn tick(&mut self, dt: f32) {
        let clip = self.state.clip();
        self.frame_timer += dt;
        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame = (self.current_frame + 1) % clip.frame_count;
        }
    }

    /// Source rectangle of the current frame on the sprite strip.
    pub fn source_rect(&self) -> URect {
        let cell = self.state.clip().first_cell + self.current_frame as u32;
        let min = UVec2::new(cell * SPRITE_SIZE, 0);
        URect::from_corners(min, min + UVec2::splat(SPRITE_SIZE))
    }

    /// Tint for the quad renderer: the state's colour, alternating
    /// brightness per frame.
    pub fn color(&self) -> Color {
        let shade = if self.current_frame % 2 == 0 { 1.0 } else { 0.85 };
        let base = self.state.base_color();
        Color::srgb(base.red * shade, base.green * shade, base.blue * shade)
    }
}

/// Message fired when the player's animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: PlayerAnimState,
    pub to: PlayerAnimState,
}

impl Message for AnimationStateChanged {}
