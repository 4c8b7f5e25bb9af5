//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub use movement::direct_velocity;
pub(crate) use movement::{apply_direct_velocity, step_colliders, sync_transforms, update_facing};
