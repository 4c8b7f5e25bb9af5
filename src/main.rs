mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod doors;
mod movement;
mod rooms;
mod sprites;
mod tiles;

use bevy::prelude::*;

use crate::core::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Sorcery+ Remake".to_string(),
                    resolution: (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins((
        core::CorePlugin,
        movement::MovementPlugin,
        rooms::RoomsPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
