//! Movement domain: player marker and kinematic state components.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Velocity in room pixels per second (y down).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

/// Top-left corner of the actor's hitbox in room pixels.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Deref, DerefMut)]
pub struct RoomPosition(pub Vec2);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}
