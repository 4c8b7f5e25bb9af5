//! Doors domain: room-to-room doors and their opening animation.

mod config;
mod door;

#[cfg(test)]
mod tests;

pub use config::*;
pub use door::{Door, DoorSide, DoorState};
