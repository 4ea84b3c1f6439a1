//! View-model resources for the display panels
//!
//! Each panel mirrors one region of the original page: move history,
//! opening name, last move, game status, recommendations and candidate
//! openings. All of them are replaced wholesale from server payloads,
//! nothing here is authoritative between renders.

use crate::api::{OpeningCandidate, Recommendation};
use bevy::prelude::*;
use rand::seq::SliceRandom;

/// Presentation cap for the openings panel
pub const MAX_DISPLAYED_OPENINGS: usize = 10;

/// PGN lines as sent by the server, newest game state wins
#[derive(Resource, Debug, Default)]
pub struct MoveHistory {
    pub lines: Vec<String>,
}

impl MoveHistory {
    pub fn replace(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Name of the opening the server matched against the game so far
#[derive(Resource, Debug, Default)]
pub struct OpeningDisplay {
    pub name: Option<String>,
}

impl OpeningDisplay {
    pub fn label(&self) -> String {
        format!(
            "Current Opening: {}",
            self.name.as_deref().unwrap_or("Unknown")
        )
    }
}

/// Last move in the server's LAN form, e.g. "e2 e4"
#[derive(Resource, Debug, Default)]
pub struct LastMoveDisplay {
    pub text: Option<String>,
}

impl LastMoveDisplay {
    pub fn label(&self) -> String {
        format!("Last Move: {}", self.text.as_deref().unwrap_or("None"))
    }
}

/// One-line game status banner
#[derive(Resource, Debug, Default)]
pub struct StatusBanner {
    pub text: String,
}

impl StatusBanner {
    pub fn set_from_status(&mut self, status: &str) {
        self.text = status_text(status).to_string();
    }
}

/// Map a server status keyword to display text
pub fn status_text(status: &str) -> &'static str {
    match status {
        "checkmate" => "Checkmate!",
        "check" => "Check!",
        "stalemate" => "Stalemate!",
        "draw" => "Draw!",
        "ongoing" => "Game is ongoing",
        _ => "Unknown status",
    }
}

/// Recommendations for one source, in server order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationGroup {
    pub source: String,
    pub entries: Vec<String>,
}

/// Recommended moves grouped by source
#[derive(Resource, Debug, Default)]
pub struct RecommendationBoard {
    pub groups: Vec<RecommendationGroup>,
}

impl RecommendationBoard {
    /// Rebuild the panel, grouping by source in first-seen order
    pub fn replace(&mut self, recommendations: Option<&[Recommendation]>) {
        self.groups.clear();
        let Some(recommendations) = recommendations else {
            return;
        };
        for rec in recommendations {
            let source = rec.source.as_deref().unwrap_or("Unknown Source");
            let entry = format!(
                "{}: {}",
                rec.mv.as_deref().unwrap_or("N/A"),
                rec.probability.as_deref().unwrap_or("N/A")
            );
            match self.groups.iter_mut().find(|g| g.source == source) {
                Some(group) => group.entries.push(entry),
                None => self.groups.push(RecommendationGroup {
                    source: source.to_string(),
                    entries: vec![entry],
                }),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Candidate openings panel, shuffled and capped for display
#[derive(Resource, Debug, Default)]
pub struct OpeningsBoard {
    pub entries: Vec<OpeningCandidate>,
}

impl OpeningsBoard {
    pub fn replace(&mut self, mut openings: Vec<OpeningCandidate>) {
        openings.shuffle(&mut rand::rng());
        openings.truncate(MAX_DISPLAYED_OPENINGS);
        self.entries = openings;
    }
}

/// Message shown in the error modal, if any.
///
/// Replaces the original client's blocking `alert()`; server-reported
/// failures and transport failures both land here. Rendering lives in
/// [`crate::ui::error_dialog`].
#[derive(Resource, Debug, Default)]
pub struct ErrorDialog {
    pub message: Option<String>,
}

impl ErrorDialog {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }
}
