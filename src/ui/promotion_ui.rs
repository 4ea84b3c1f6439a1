//! Pawn promotion chooser
//!
//! Shown when a move gesture leaves a pawn's pre-promotion rank. The move
//! is held back until a piece is picked; choosing sends a
//! [`PromotionSelected`] message which submits the request. Cancelling
//! abandons the gesture without submitting anything.

use crate::game::board::piece_glyph;
use crate::game::promotion::{PendingPromotion, PromotionSelected, PROMOTION_CHOICES};
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub fn promotion_ui(
    mut contexts: EguiContexts,
    mut pending_promotion: ResMut<PendingPromotion>,
    mut promotion_messages: MessageWriter<PromotionSelected>,
) {
    if !pending_promotion.is_active() {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let (Some(from), Some(to)) = (pending_promotion.from, pending_promotion.to) else {
        return;
    };

    // Modal overlay behind the chooser
    egui::Area::new(egui::Id::new("promotion_overlay"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter().rect_filled(
                screen_rect,
                0.0,
                egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
            );
        });

    egui::Window::new("Promote Pawn")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(12.0)
                .inner_margin(20.0)
                .stroke(egui::Stroke::new(2.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Choose Promotion Piece")
                        .size(20.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.add_space(15.0);

                ui.horizontal(|ui| {
                    for (letter, name) in PROMOTION_CHOICES {
                        let code = if pending_promotion.white {
                            letter.to_ascii_uppercase()
                        } else {
                            letter
                        };
                        let symbol = piece_glyph(code).unwrap_or(letter);

                        let button = egui::Button::new(
                            egui::RichText::new(symbol.to_string())
                                .size(48.0)
                                .color(UiColors::TEXT_PRIMARY),
                        )
                        .min_size(egui::vec2(70.0, 70.0))
                        .fill(UiColors::BG_DARK);

                        if ui.add(button).on_hover_text(name).clicked() {
                            promotion_messages.write(PromotionSelected {
                                from,
                                to,
                                piece: letter,
                            });
                        }
                        ui.add_space(5.0);
                    }
                });

                ui.add_space(12.0);
                if ui
                    .add_sized([110.0, 28.0], egui::Button::new("Cancel"))
                    .clicked()
                {
                    pending_promotion.clear();
                }
            });
        });
}
