//! UI module - egui rendering systems
//!
//! All rendering goes through `bevy_egui` in the `EguiPrimaryContextPass`
//! schedule. Panels run before the central board so egui lays them out
//! first; modal windows (promotion chooser, error dialog) come last so they
//! sit on top.

pub mod board_ui;
pub mod controls;
pub mod error_dialog;
pub mod panels;
pub mod promotion_ui;
pub mod styles;

use crate::core::AppState;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            board_ui::loading_ui.run_if(in_state(AppState::Loading)),
        );

        app.add_systems(
            EguiPrimaryContextPass,
            (
                panels::status_panel_ui,
                panels::info_panel_ui,
                controls::controls_ui,
                board_ui::board_ui,
                promotion_ui::promotion_ui,
                error_dialog::error_dialog_ui,
            )
                .chain()
                .run_if(in_state(AppState::InGame)),
        );
    }
}
