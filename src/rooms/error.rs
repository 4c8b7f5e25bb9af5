//! Rooms domain: error types for room loading and transitions.

use std::path::PathBuf;

use thiserror::Error;

/// Authoring mistakes in room or door definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no room registered with id '{0}'")]
    UnknownRoom(String),

    #[error("door '{door_id}' in room '{room_id}' leads to unregistered room '{target_room}'")]
    MissingTargetRoom {
        room_id: String,
        door_id: String,
        target_room: String,
    },

    #[error(
        "door '{door_id}' in room '{room_id}' leads to door '{target_door}', which room '{target_room}' does not have"
    )]
    MissingTargetDoor {
        room_id: String,
        door_id: String,
        target_room: String,
        target_door: String,
    },

    #[error("room '{room_id}' has more than one door with id '{door_id}'")]
    DuplicateDoorId { room_id: String, door_id: String },
}

/// Failures of [`RoomManager::execute_transition`](super::RoomManager::execute_transition).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("no door transition is ready to execute")]
    NoPendingTransition,
}

/// Errors reading a collision-grid JSON file.
#[derive(Debug, Error)]
pub enum GridLoadError {
    #[error("failed to read collision grid '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse collision grid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(
        "collision grid declares {expected_width}x{expected_height} but holds {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("collision grid cell ({col}, {row}) has value {value}, expected 0 or 1")]
    InvalidCell { col: usize, row: usize, value: i64 },
}
