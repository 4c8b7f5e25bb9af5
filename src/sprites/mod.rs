//! Sprites module for player animation.
//!
//! Picks the animation state from movement, advances frames on a timer and
//! tints the player quad to match.

pub mod animation;
mod systems;


use bevy::prelude::*;

pub use animation::*;

use crate::core::{FrameSet, gameplay_active};
use crate::sprites::systems::{
    log_animation_changes, select_player_animation, sync_player_sprite, tick_player_animation,
};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>()
            .add_systems(
                FixedUpdate,
                (select_player_animation, tick_player_animation)
                    .chain()
                    .in_set(FrameSet::Sync)
                    .run_if(gameplay_active),
            )
            .add_systems(Update, (sync_player_sprite, log_animation_changes));
    }
}
