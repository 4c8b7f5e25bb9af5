//! Core domain: camera, info panel and window-level input.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::layout::{GAME_AREA_HEIGHT, INFO_PANEL_HEIGHT, RENDER_SCALE, WINDOW_WIDTH};

/// Marker for the HUD strip under the game area.
#[derive(Component, Debug)]
pub struct InfoPanel;

pub const INFO_PANEL_COLOR: Color = Color::srgb_u8(0, 0, 139);

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn spawn_info_panel(mut commands: Commands) {
    let height = INFO_PANEL_HEIGHT * RENDER_SCALE;
    // Window bottom is at -(game + panel) / 2, so the panel centre lands at -game / 2.
    let y = -GAME_AREA_HEIGHT * 0.5;

    commands.spawn((
        InfoPanel,
        Sprite {
            color: INFO_PANEL_COLOR,
            custom_size: Some(Vec2::new(WINDOW_WIDTH, height)),
            ..default()
        },
        Transform::from_xyz(0.0, y, 5.0),
    ));
}

pub(crate) fn exit_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}
