//! Error dialog rendering
//!
//! Dismissable modal for the [`ErrorDialog`] resource. Nothing is retried;
//! the rest of the UI stays visible underneath but ignores input while the
//! dialog is open.

use crate::game::session::ErrorDialog;
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub fn error_dialog_ui(mut contexts: EguiContexts, mut dialog: ResMut<ErrorDialog>) {
    if !dialog.is_open() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let Some(message) = dialog.message.clone() else {
        return;
    };

    // Dim the page behind the dialog
    egui::Area::new(egui::Id::new("error_overlay"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                0.0,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 140),
            );
        });

    egui::Window::new("error_dialog")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(12.0)
                .inner_margin(20.0)
                .stroke(egui::Stroke::new(2.0, UiColors::DANGER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&message)
                        .size(16.0)
                        .color(UiColors::TEXT_PRIMARY),
                );
                ui.add_space(15.0);
                if ui
                    .add_sized([120.0, 32.0], egui::Button::new("Dismiss"))
                    .clicked()
                {
                    dialog.dismiss();
                }
            });
        });
}
