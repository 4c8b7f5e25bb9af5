//! Sprites domain: player animation systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{MovementInput, Player, Velocity};
use crate::sprites::animation::{AnimationStateChanged, PlayerAnimState, PlayerAnimation};

pub(crate) fn select_player_animation(
    input: Res<MovementInput>,
    mut query: Query<(Entity, &Velocity, &mut PlayerAnimation), With<Player>>,
    mut changed: MessageWriter<AnimationStateChanged>,
) {
    let thrusting = input.axis.y < 0.0;
    for (entity, velocity, mut animation) in &mut query {
        let from = animation.state;
        let to = PlayerAnimState::from_motion(velocity.0, thrusting);
        if animation.set_state(to) {
            changed.write(AnimationStateChanged { entity, from, to });
        }
    }
}

pub(crate) fn tick_player_animation(time: Res<Time>, mut query: Query<&mut PlayerAnimation>) {
    let dt = time.delta_secs();
    for mut animation in &mut query {
        animation.tick(dt);
    }
}

pub(crate) fn sync_player_sprite(
    mut query: Query<(&PlayerAnimation, &mut Sprite), Changed<PlayerAnimation>>,
) {
    for (animation, mut sprite) in &mut query {
        sprite.color = animation.color();
        sprite.flip_x = animation.state.flip_x();
    }
}

pub(crate) fn log_animation_changes(mut changed: MessageReader<AnimationStateChanged>) {
    for message in changed.read() {
        debug!(
            "Animation {:?} -> {:?} on {}",
            message.from, message.to, message.entity
        );
    }
}
