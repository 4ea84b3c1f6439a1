//! Clickable board grid
//!
//! Renders the 64 squares as a flat egui grid with unicode piece glyphs and
//! routes clicks through the two-phase selection gesture. Input is ignored
//! while any request is in flight, a promotion choice is pending, or the
//! error dialog is open; a click mid-request could otherwise supersede a
//! pending board re-fetch and leave the display stale.

use crate::core::ServerConfig;
use crate::game::board::{piece_glyph, BoardState, SquareId};
use crate::game::promotion::{needs_promotion_prompt, PendingPromotion};
use crate::game::requests::{
    spawn_move_request, BoardFetchTask, ControlTask, MoveTask, RequestGeneration,
};
use crate::game::selection::{handle_square_click, ClickOutcome, Selection};
use crate::game::session::ErrorDialog;
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

const SQUARE_SIDE: f32 = 56.0;

#[allow(clippy::too_many_arguments)]
pub fn board_ui(
    mut contexts: EguiContexts,
    mut commands: Commands,
    board: Res<BoardState>,
    mut selection: ResMut<Selection>,
    mut pending_promotion: ResMut<PendingPromotion>,
    move_in_flight: Option<Res<MoveTask>>,
    control_in_flight: Option<Res<ControlTask>>,
    fetch_in_flight: Option<Res<BoardFetchTask>>,
    dialog: Res<ErrorDialog>,
    config: Res<ServerConfig>,
    mut generation: ResMut<RequestGeneration>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let input_locked = move_in_flight.is_some()
        || control_in_flight.is_some()
        || fetch_in_flight.is_some()
        || pending_promotion.is_active()
        || dialog.is_open();

    let mut clicked_square = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG_DARK))
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);

            let pad = ((ui.available_width() - SQUARE_SIDE * 8.0) * 0.5).max(0.0);
            for row in 0..8u8 {
                ui.horizontal(|ui| {
                    ui.add_space(pad);
                    for file in 0..8u8 {
                        let square = SquareId::from_parts(row, file);
                        if draw_square(ui, &board, &selection, square).clicked() && !input_locked {
                            clicked_square = Some(square);
                        }
                    }
                });
            }
        });

    let Some(clicked) = clicked_square else {
        return;
    };

    match handle_square_click(&board, &mut selection, clicked) {
        ClickOutcome::Ignored => {}
        ClickOutcome::Selected(square) => {
            debug!("[BOARD] selected {}", square.to_algebraic());
        }
        ClickOutcome::Move { from, to } => match board.piece_at(from) {
            Some(piece) if needs_promotion_prompt(piece, from) => {
                pending_promotion.start(from, to, piece.is_ascii_uppercase());
            }
            _ => spawn_move_request(&mut commands, &config, &mut generation, from, to, None),
        },
    }
}

fn draw_square(
    ui: &mut egui::Ui,
    board: &BoardState,
    selection: &Selection,
    square: SquareId,
) -> egui::Response {
    let is_light = (square.row() + square.file()) % 2 == 0;
    let fill = if is_light {
        UiColors::SQUARE_LIGHT
    } else {
        UiColors::SQUARE_DARK
    };
    let stroke = if selection.selected == Some(square) {
        egui::Stroke::new(2.0, UiColors::SELECTED)
    } else {
        egui::Stroke::NONE
    };

    let glyph = board
        .piece_at(square)
        .and_then(piece_glyph)
        .map(String::from)
        .unwrap_or_default();

    let button = egui::Button::new(
        egui::RichText::new(glyph)
            .size(34.0)
            .color(egui::Color32::BLACK),
    )
    .fill(fill)
    .stroke(stroke)
    .corner_radius(egui::CornerRadius::ZERO);

    ui.add_sized([SQUARE_SIDE, SQUARE_SIDE], button)
}

/// Shown while the initial board state is being fetched
pub fn loading_ui(mut contexts: EguiContexts) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG_DARK))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(200.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new("Connecting to server...")
                        .size(16.0)
                        .color(UiColors::TEXT_SECONDARY),
                );
            });
        });
}
