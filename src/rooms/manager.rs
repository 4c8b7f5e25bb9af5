//! Rooms domain: the active room and the door transition state machine.
//!
//! The manager owns the current room's tile grid and doors and drives
//! `Idle -> DoorOpening -> TransitionReady -> Idle`. It never touches the
//! player: after a transition the caller re-wires the player's collider from
//! [`RoomManager::current_tile_map`] and [`RoomManager::blocking_rects`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use bevy::prelude::*;

use crate::doors::{Door, FALLBACK_ARRIVAL};
use crate::rooms::error::{ConfigurationError, RoomError};
use crate::tiles::TileGrid;

/// Everything a room builder produces.
#[derive(Debug, Clone)]
pub struct RoomLayout {
    pub tiles: TileGrid,
    pub doors: Vec<Door>,
}

/// Builds a fresh copy of a room every time it is entered.
pub type RoomBuilder = Box<dyn Fn() -> RoomLayout + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionState {
    /// Normal gameplay.
    #[default]
    Idle,
    /// A door is animating; gameplay is frozen.
    DoorOpening,
    /// The animation finished; waiting for the room swap.
    TransitionReady,
}

/// Where a finished door leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorTarget {
    pub room_id: String,
    pub door_id: String,
}

#[derive(Resource, Default)]
pub struct RoomManager {
    builders: HashMap<String, RoomBuilder>,
    current_room_id: String,
    tile_map: Option<Arc<TileGrid>>,
    doors: Vec<Door>,
    state: TransitionState,
    /// Index into `doors` of the door being opened.
    active_door: Option<usize>,
}

impl fmt::Debug for RoomManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomManager")
            .field("rooms", &self.room_ids())
            .field("current_room_id", &self.current_room_id)
            .field("doors", &self.doors.len())
            .field("state", &self.state)
            .field("active_door", &self.active_door)
            .finish()
    }
}

impl RoomManager {
    // -------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------

    /// Register (or replace) the builder for a room id.
    pub fn register_room<F>(&mut self, room_id: impl Into<String>, builder: F)
    where
        F: Fn() -> RoomLayout + Send + Sync + 'static,
    {
        self.builders.insert(room_id.into(), Box::new(builder));
    }

    pub fn has_room(&self, room_id: &str) -> bool {
        self.builders.contains_key(room_id)
    }

    /// Registered room ids, sorted.
    pub fn room_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Check every registered room's doors against the registry.
    ///
    /// Builds each room once. Returns every problem found, empty when all
    /// doors resolve.
    pub fn validate(&self) -> Vec<ConfigurationError> {
        let layouts: HashMap<&str, RoomLayout> = self
            .builders
            .iter()
            .map(|(id, build)| (id.as_str(), build()))
            .collect();

        let mut errors = Vec::new();
        for room_id in self.room_ids() {
            let Some(layout) = layouts.get(room_id) else {
                continue;
            };

            let mut seen = HashSet::new();
            for door in &layout.doors {
                if !seen.insert(door.id.as_str()) {
                    errors.push(ConfigurationError::DuplicateDoorId {
                        room_id: room_id.to_string(),
                        door_id: door.id.clone(),
                    });
                }

                match layouts.get(door.target_room.as_str()) {
                    None => errors.push(ConfigurationError::MissingTargetRoom {
                        room_id: room_id.to_string(),
                        door_id: door.id.clone(),
                        target_room: door.target_room.clone(),
                    }),
                    Some(target) if !target.doors.iter().any(|d| d.id == door.target_door) => {
                        errors.push(ConfigurationError::MissingTargetDoor {
                            room_id: room_id.to_string(),
                            door_id: door.id.clone(),
                            target_room: door.target_room.clone(),
                            target_door: door.target_door.clone(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        errors
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Replace the active room wholesale with a fresh build of `room_id`.
    /// Resets the transition state. On error nothing changes.
    pub fn load_room(&mut self, room_id: &str) -> Result<(), ConfigurationError> {
        let build = self
            .builders
            .get(room_id)
            .ok_or_else(|| ConfigurationError::UnknownRoom(room_id.to_string()))?;
        let layout = build();

        self.set_tile_map(layout.tiles);
        self.set_doors(layout.doors);
        self.current_room_id = room_id.to_string();
        self.state = TransitionState::Idle;
        self.active_door = None;

        info!(
            "Loaded room '{}' with {} door(s)",
            self.current_room_id,
            self.doors.len()
        );
        Ok(())
    }

    pub fn set_tile_map(&mut self, tiles: TileGrid) {
        self.tile_map = Some(Arc::new(tiles));
    }

    /// Doors always enter a room closed.
    pub fn set_doors(&mut self, mut doors: Vec<Door>) {
        for door in &mut doors {
            door.reset();
        }
        self.doors = doors;
        self.active_door = None;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn current_room_id(&self) -> &str {
        &self.current_room_id
    }

    /// Shared handle to the active grid, for handing to a collider.
    pub fn current_tile_map(&self) -> Option<Arc<TileGrid>> {
        self.tile_map.clone()
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Gameplay runs only while idle.
    pub fn is_frozen(&self) -> bool {
        self.state != TransitionState::Idle
    }

    pub fn active_door(&self) -> Option<&Door> {
        self.active_door.and_then(|i| self.doors.get(i))
    }

    /// Door footprints, rebuilt by value for the player's collider.
    pub fn blocking_rects(&self) -> Vec<Rect> {
        self.doors.iter().map(Door::bounds).collect()
    }

    // -------------------------------------------------------------------------
    // Transition state machine
    // -------------------------------------------------------------------------

    /// Start opening the first closed door the actor is aligned with.
    /// Only acts while idle; returns whether a door was triggered.
    pub fn check_door_triggers(&mut self, position: Vec2, width: f32, height: f32) -> bool {
        if self.state != TransitionState::Idle {
            return false;
        }

        let Some(index) = self
            .doors
            .iter()
            .position(|door| door.is_aligned(position, width, height))
        else {
            return false;
        };

        let door = &mut self.doors[index];
        door.start_opening();
        info!(
            "Door '{}' opening toward '{}'/'{}'",
            door.id, door.target_room, door.target_door
        );

        self.active_door = Some(index);
        self.state = TransitionState::DoorOpening;
        true
    }

    /// Advance the active door's animation. Returns the destination once,
    /// on the frame the animation completes.
    pub fn update(&mut self, dt: f32) -> Option<DoorTarget> {
        if self.state != TransitionState::DoorOpening {
            return None;
        }

        let door = self.active_door.and_then(|i| self.doors.get_mut(i))?;
        if !door.update(dt) {
            return None;
        }

        self.state = TransitionState::TransitionReady;
        Some(DoorTarget {
            room_id: door.target_room.clone(),
            door_id: door.target_door.clone(),
        })
    }

    /// Swap to the active door's target room and return where the actor
    /// arrives.
    ///
    /// A missing target door falls back to [`FALLBACK_ARRIVAL`]. A missing
    /// target room leaves the current room in place with the door open, so
    /// it cannot re-trigger, and returns to idle.
    pub fn execute_transition(&mut self, actor_width: f32) -> Result<Vec2, RoomError> {
        if self.state != TransitionState::TransitionReady {
            return Err(RoomError::NoPendingTransition);
        }

        let Some(target) = self.active_door().map(|door| DoorTarget {
            room_id: door.target_room.clone(),
            door_id: door.target_door.clone(),
        }) else {
            self.state = TransitionState::Idle;
            return Err(RoomError::NoPendingTransition);
        };

        if let Err(err) = self.load_room(&target.room_id) {
            self.state = TransitionState::Idle;
            self.active_door = None;
            return Err(err.into());
        }

        match self.doors.iter().find(|door| door.id == target.door_id) {
            Some(door) => Ok(door.arrival_position(actor_width)),
            None => {
                warn!(
                    "Room '{}' has no door '{}', arriving at fallback position",
                    target.room_id, target.door_id
                );
                Ok(FALLBACK_ARRIVAL)
            }
        }
    }
}
