//! Control buttons
//!
//! Reset, Undo and AI Move each issue one POST. The buttons are disabled
//! while any request is in flight; a spinner shows next to them.

use crate::core::ServerConfig;
use crate::game::requests::{
    spawn_control_request, BoardFetchTask, ControlAction, ControlTask, MoveTask, RequestGeneration,
};
use crate::game::session::ErrorDialog;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

#[allow(clippy::too_many_arguments)]
pub fn controls_ui(
    mut contexts: EguiContexts,
    mut commands: Commands,
    control_in_flight: Option<Res<ControlTask>>,
    move_in_flight: Option<Res<MoveTask>>,
    fetch_in_flight: Option<Res<BoardFetchTask>>,
    dialog: Res<ErrorDialog>,
    config: Res<ServerConfig>,
    mut generation: ResMut<RequestGeneration>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // A pending board re-fetch also locks the buttons; a button press would
    // supersede it and the fetched position would be discarded as stale.
    let busy = control_in_flight.is_some()
        || move_in_flight.is_some()
        || fetch_in_flight.is_some()
        || dialog.is_open();

    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let mut action = None;
            if ui
                .add_enabled(!busy, egui::Button::new("Reset").min_size(egui::vec2(90.0, 30.0)))
                .clicked()
            {
                action = Some(ControlAction::Reset);
            }
            if ui
                .add_enabled(!busy, egui::Button::new("Undo").min_size(egui::vec2(90.0, 30.0)))
                .clicked()
            {
                action = Some(ControlAction::Undo);
            }
            if ui
                .add_enabled(
                    !busy,
                    egui::Button::new("AI Move").min_size(egui::vec2(90.0, 30.0)),
                )
                .clicked()
            {
                action = Some(ControlAction::AiMove);
            }

            if let Some(action) = action {
                spawn_control_request(&mut commands, &config, &mut generation, action);
            }

            if busy && !dialog.is_open() {
                ui.add_space(8.0);
                ui.spinner();
            }
        });
        ui.add_space(8.0);
    });
}
