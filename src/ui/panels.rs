//! Display panels
//!
//! The top bar carries the status banner, opening name and last move. The
//! right panel carries the move list, recommended moves grouped by source,
//! and the candidate openings in two columns. Pure rendering; every value
//! comes from the view-model resources.

use crate::game::session::{
    LastMoveDisplay, MoveHistory, OpeningDisplay, OpeningsBoard, RecommendationBoard, StatusBanner,
};
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub fn status_panel_ui(
    mut contexts: EguiContexts,
    banner: Res<StatusBanner>,
    opening: Res<OpeningDisplay>,
    last_move: Res<LastMoveDisplay>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(opening.label())
                    .size(14.0)
                    .color(UiColors::TEXT_SECONDARY),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(last_move.label())
                    .size(14.0)
                    .color(UiColors::TEXT_SECONDARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !banner.text.is_empty() {
                    ui.label(
                        egui::RichText::new(&banner.text)
                            .size(16.0)
                            .strong()
                            .color(UiColors::ACCENT_GOLD),
                    );
                }
            });
        });
        ui.add_space(6.0);
    });
}

pub fn info_panel_ui(
    mut contexts: EguiContexts,
    history: Res<MoveHistory>,
    recommendations: Res<RecommendationBoard>,
    openings: Res<OpeningsBoard>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::right("info_panel")
        .resizable(true)
        .default_width(300.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);

            section_heading(ui, "Moves");
            egui::ScrollArea::vertical()
                .id_salt("move_list")
                .max_height(170.0)
                .show(ui, |ui| {
                    if history.lines.is_empty() {
                        placeholder(ui, "No moves yet.");
                    }
                    for line in &history.lines {
                        ui.label(
                            egui::RichText::new(line.trim())
                                .monospace()
                                .color(UiColors::TEXT_PRIMARY),
                        );
                    }
                });

            ui.separator();
            section_heading(ui, "Recommended Moves");
            if recommendations.is_empty() {
                placeholder(ui, "No recommended moves available.");
            } else {
                for (i, group) in recommendations.groups.iter().enumerate() {
                    if i > 0 {
                        ui.separator();
                    }
                    ui.label(
                        egui::RichText::new(format!("{}:", group.source))
                            .strong()
                            .color(UiColors::TEXT_PRIMARY),
                    );
                    for entry in &group.entries {
                        ui.label(
                            egui::RichText::new(format!("  • {entry}"))
                                .color(UiColors::TEXT_SECONDARY),
                        );
                    }
                }
            }

            ui.separator();
            section_heading(ui, "Possible Openings");
            if openings.entries.is_empty() {
                placeholder(ui, "No possible openings found.");
            } else {
                ui.columns(2, |columns| {
                    for (i, opening) in openings.entries.iter().enumerate() {
                        let column = &mut columns[i % 2];
                        column.label(
                            egui::RichText::new(&opening.name)
                                .strong()
                                .color(UiColors::TEXT_PRIMARY),
                        );
                        column.label(
                            egui::RichText::new(&opening.full_line)
                                .small()
                                .color(UiColors::TEXT_DIM),
                        );
                        column.add_space(4.0);
                    }
                });
            }
        });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(15.0)
            .strong()
            .color(UiColors::TEXT_PRIMARY),
    );
    ui.add_space(4.0);
}

fn placeholder(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(UiColors::TEXT_DIM));
}
