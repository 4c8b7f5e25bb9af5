//! Debug domain: overlay toggle and refresh systems.

use bevy::prelude::*;

use crate::core::GameplayConfig;
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfo, DebugInfoOverlay, format_debug_info, spawn_debug_info_overlay};
use crate::movement::{Collider, Player, RoomPosition, Velocity};
use crate::rooms::RoomManager;

pub(crate) fn apply_debug_config(config: Res<GameplayConfig>, mut debug_state: ResMut<DebugState>) {
    debug_state.show_info = config.show_debug_info;
}

/// Toggle the info overlay with F1
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "Debug overlay {}",
            if debug_state.show_info { "on" } else { "off" }
        );
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    rooms: Res<RoomManager>,
    player_query: Query<(&RoomPosition, &Velocity, &Collider), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((position, velocity, collider)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        **text = format_debug_info(&DebugInfo {
            position: position.0,
            velocity: velocity.0,
            on_ground: collider.on_ground(),
            room_id: rooms.current_room_id(),
            transition: rooms.state(),
        });
    }
}
