//! Movement domain: velocity control, collider stepping and render sync.

use bevy::prelude::*;

use crate::core::{Z_PLAYER, room_to_world};
use crate::movement::{
    Collider, Facing, MovementInput, MovementTuning, Player, RoomPosition, Velocity,
};

/// Velocity for the given input axis. There is no acceleration: a held key
/// moves at full speed, and with no vertical key the actor sinks at
/// `gravity_speed`.
pub fn direct_velocity(axis: Vec2, tuning: &MovementTuning) -> Vec2 {
    let x = if axis.x == 0.0 {
        0.0
    } else {
        axis.x.signum() * tuning.speed
    };
    let y = if axis.y == 0.0 {
        tuning.gravity_speed
    } else {
        axis.y.signum() * tuning.speed
    };
    Vec2::new(x, y)
}

pub(crate) fn apply_direct_velocity(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut Velocity, With<Player>>,
) {
    for mut velocity in &mut query {
        velocity.0 = direct_velocity(input.axis, &tuning);
    }
}

pub(crate) fn step_colliders(
    time: Res<Time>,
    mut query: Query<(&mut RoomPosition, &mut Velocity, &mut Collider)>,
) {
    let dt = time.delta_secs();

    for (mut position, mut velocity, mut collider) in &mut query {
        let was_on_ground = collider.on_ground();
        collider.step(&mut position.0, &mut velocity.0, dt);

        if collider.on_ground() != was_on_ground {
            if collider.on_ground() {
                debug!("Landed at ({:.0}, {:.0})", position.x, position.y);
            } else {
                debug!("Left ground at ({:.0}, {:.0})", position.x, position.y);
            }
        }
    }
}

pub(crate) fn update_facing(mut query: Query<(&Velocity, &mut Facing), With<Player>>) {
    for (velocity, mut facing) in &mut query {
        if velocity.x > 0.0 {
            *facing = Facing::Right;
        } else if velocity.x < 0.0 {
            *facing = Facing::Left;
        }
    }
}

/// Copy room-space positions onto render transforms.
pub(crate) fn sync_transforms(mut query: Query<(&RoomPosition, &Collider, &mut Transform)>) {
    for (position, collider, mut transform) in &mut query {
        transform.translation = room_to_world(position.0, collider.size, Z_PLAYER);
    }
}
