//! Movement domain: player locomotion and tile collision.

mod bootstrap;
mod collider;
mod components;
mod resources;
mod systems;


pub use collider::{Collider, HITBOX_HEIGHT, HITBOX_WIDTH, overlaps};
pub use components::{Facing, Player, RoomPosition, Velocity};
pub use resources::{MovementInput, MovementTuning};
pub use systems::direct_velocity;

use bevy::prelude::*;

use crate::core::{BootSet, FrameSet, gameplay_active};
use crate::movement::bootstrap::{apply_movement_config, spawn_player};
use crate::movement::systems::{
    apply_direct_velocity, read_input, step_colliders, sync_transforms, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                Startup,
                (
                    apply_movement_config.after(BootSet::Config).before(BootSet::Spawn),
                    spawn_player.in_set(BootSet::Spawn),
                ),
            )
            .add_systems(
                FixedUpdate,
                (read_input, apply_direct_velocity, update_facing)
                    .chain()
                    .in_set(FrameSet::Control)
                    .run_if(gameplay_active),
            )
            .add_systems(
                FixedUpdate,
                step_colliders
                    .in_set(FrameSet::Physics)
                    .run_if(gameplay_active),
            )
            .add_systems(FixedUpdate, sync_transforms.in_set(FrameSet::Sync));
    }
}
