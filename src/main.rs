use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use bobbychess::core::AppState;
use bobbychess::game::GamePlugin;
use bobbychess::ui::UiPlugin;

const WINDOW_WIDTH: u32 = 1100;
const WINDOW_HEIGHT: u32 = 760;

fn main() {
    let window = Window {
        title: "bobbychess".to_string(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };
    let primary_window = Some(window);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..default()
        })
        .init_state::<AppState>()
        .add_plugins(GamePlugin)
        .add_plugins(UiPlugin)
        .run();
}
