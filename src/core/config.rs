//! Core domain: runtime tuning loaded from `assets/data/gameplay.ron`.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::doors::{Door, DoorSide};

pub const GAMEPLAY_CONFIG_PATH: &str = "assets/data/gameplay.ron";

// ============================================================================
// Config definitions
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub schema_version: u32,
    /// Movement speed while a direction key is held (px/s).
    pub speed: f32,
    /// Constant fall speed when no vertical key is held (px/s).
    pub gravity_speed: f32,
    pub start_room: String,
    pub player_spawn: PointDef,
    pub show_debug_info: bool,
    /// Rooms whose tiles come from collision-grid JSON files.
    pub collision_rooms: Vec<CollisionRoomDef>,
    /// Extra doors placed into already registered rooms.
    pub door_links: Vec<DoorLinkDef>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            speed: 200.0,
            gravity_speed: 120.0,
            start_room: "room_1".to_string(),
            player_spawn: PointDef { x: 40.0, y: 96.0 },
            show_debug_info: true,
            collision_rooms: Vec::new(),
            door_links: Vec::new(),
        }
    }
}

/// Serializable point in room pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl From<PointDef> for Vec2 {
    fn from(p: PointDef) -> Self {
        Vec2::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DoorDef {
    pub id: String,
    pub side: DoorSide,
    pub x: f32,
    pub y: f32,
    pub target_room: String,
    pub target_door: String,
}

impl DoorDef {
    pub fn to_door(&self) -> Door {
        Door::new(
            self.id.clone(),
            self.side,
            Vec2::new(self.x, self.y),
            self.target_room.clone(),
            self.target_door.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CollisionRoomDef {
    pub id: String,
    /// Path to the collision-grid JSON file.
    pub grid: String,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DoorLinkDef {
    pub room: String,
    pub door: DoorDef,
}

// ============================================================================
// Loading
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {details}")]
    Parse { path: String, details: String },
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_gameplay_config(contents: &str) -> Result<GameplayConfig, ron::error::SpannedError> {
    ron_options().from_str(contents)
}

pub fn load_gameplay_config(path: &Path) -> Result<GameplayConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: file_name.clone(),
        source,
    })?;

    parse_gameplay_config(&contents).map_err(|e| ConfigLoadError::Parse {
        path: file_name,
        details: e.to_string(),
    })
}

/// Startup system: replace the default config with the file's, if readable.
pub(crate) fn setup_gameplay_config(mut config: ResMut<GameplayConfig>) {
    let path = Path::new(GAMEPLAY_CONFIG_PATH);
    if !path.exists() {
        warn!("{} not found, using default gameplay config", GAMEPLAY_CONFIG_PATH);
        return;
    }

    match load_gameplay_config(path) {
        Ok(loaded) => {
            info!(
                "Loaded gameplay config: speed {}, gravity {}, start room '{}', {} collision room(s)",
                loaded.speed,
                loaded.gravity_speed,
                loaded.start_room,
                loaded.collision_rooms.len()
            );
            *config = loaded;
        }
        Err(e) => error!("{e}; using default gameplay config"),
    }
}
