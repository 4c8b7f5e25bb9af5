//! Debug domain: overlay spawning and text formatting.

use bevy::prelude::*;

use crate::rooms::TransitionState;

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Snapshot of everything the overlay prints.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugInfo<'a> {
    pub position: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub room_id: &'a str,
    pub transition: TransitionState,
}

pub fn format_debug_info(info: &DebugInfo<'_>) -> String {
    format!(
        "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nOn ground: {}\nRoom: {}\nTransition: {:?}\nF1 to hide",
        info.position.x,
        info.position.y,
        info.velocity.x,
        info.velocity.y,
        info.on_ground,
        info.room_id,
        info.transition
    )
}

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
