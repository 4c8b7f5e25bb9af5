//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::core::GameplayConfig;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    /// Speed applied while a direction key is held (px/s).
    pub speed: f32,
    /// Downward speed when no vertical key is held (px/s).
    pub gravity_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            gravity_speed: 120.0,
        }
    }
}

impl MovementTuning {
    pub fn from_config(config: &GameplayConfig) -> Self {
        Self {
            speed: config.speed,
            gravity_speed: config.gravity_speed,
        }
    }
}

/// Directional input for the current tick, in room axes (y down).
/// Each component is -1, 0 or 1.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    pub axis: Vec2,
}
