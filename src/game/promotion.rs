//! Pawn promotion flow
//!
//! When a move gesture leaves a pawn's pre-promotion rank, the move is held
//! back while a chooser dialog asks for the promotion piece. The dialog is
//! non-blocking; the request is only submitted once a piece is picked.

use super::board::SquareId;
use super::requests::{spawn_move_request, RequestGeneration};
use crate::core::ServerConfig;
use bevy::prelude::*;

/// Promotion piece letters in the server's UCI spelling
pub const PROMOTION_CHOICES: [(char, &str); 4] = [
    ('q', "Queen"),
    ('r', "Rook"),
    ('b', "Bishop"),
    ('n', "Knight"),
];

/// Resource holding a move gesture that is waiting on a promotion choice
#[derive(Resource, Debug, Default, Clone)]
pub struct PendingPromotion {
    pub from: Option<SquareId>,
    pub to: Option<SquareId>,
    pub white: bool,
    pub is_pending: bool,
}

impl PendingPromotion {
    pub fn start(&mut self, from: SquareId, to: SquareId, white: bool) {
        self.from = Some(from);
        self.to = Some(to);
        self.white = white;
        self.is_pending = true;
    }

    pub fn clear(&mut self) {
        self.from = None;
        self.to = None;
        self.is_pending = false;
    }

    pub fn is_active(&self) -> bool {
        self.is_pending
    }
}

/// Message sent when the player picks a promotion piece in the dialog
#[derive(bevy::ecs::message::Message, Debug, Clone)]
pub struct PromotionSelected {
    pub from: SquareId,
    pub to: SquareId,
    /// Lowercase piece letter, one of `q r b n`
    pub piece: char,
}

/// Whether submitting this move must first ask for a promotion piece.
///
/// Mirrors the original client: a white pawn leaving rank 7 or a black pawn
/// leaving rank 2 prompts, regardless of destination. The server rejects
/// the move anyway if the destination is not the last rank.
pub fn needs_promotion_prompt(piece: char, from: SquareId) -> bool {
    match piece {
        'P' => from.rank() == 7,
        'p' => from.rank() == 2,
        _ => false,
    }
}

/// Submit the held-back move once a promotion piece has been picked
pub fn apply_promotion_choice(
    mut commands: Commands,
    mut messages: MessageReader<PromotionSelected>,
    mut pending: ResMut<PendingPromotion>,
    config: Res<ServerConfig>,
    mut generation: ResMut<RequestGeneration>,
) {
    for selected in messages.read() {
        spawn_move_request(
            &mut commands,
            &config,
            &mut generation,
            selected.from,
            selected.to,
            Some(selected.piece),
        );
        pending.clear();
    }
}
