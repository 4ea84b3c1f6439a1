//! Payload types for the chess analysis server
//!
//! Field names and spellings follow the server's JSON exactly, including
//! the capitalized recommendation keys (`Move`, `Probability%`, `Source`).
//! Everything the client does not strictly need is still decoded with a
//! `default` so a terser server build will not break deserialization.

use serde::{Deserialize, Serialize};

/// `/get_board_state` answers with a bare 8x8 array, rank-major from rank 8,
/// each cell a one-letter piece code (lowercase black, uppercase white) or null.
pub type BoardGrid = Vec<Vec<Option<String>>>;

/// Request body for `/get_board_state` and `/get_possible_openings`
#[derive(Serialize)]
pub struct PgnQuery<'a> {
    pub pgn: &'a str,
}

/// One recommended move, tagged with the source that produced it
/// (historical data, style simulation, or engine analysis)
#[derive(Deserialize, Debug, Clone)]
pub struct Recommendation {
    #[serde(rename = "Move", default)]
    pub mv: Option<String>,
    #[serde(rename = "Reason", default)]
    pub reason: Option<String>,
    #[serde(rename = "Probability%", default)]
    pub probability: Option<String>,
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
}

/// One opening whose book line is compatible with the current game
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OpeningCandidate {
    pub name: String,
    pub full_line: String,
}

/// Full `/move` response. On success every display region is fed from this
/// single payload; on failure only `status` and `message` are meaningful
/// (the server reports illegal moves as `status == "invalid move"`).
#[derive(Deserialize, Debug, Clone)]
pub struct MoveResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub move_stack: Vec<String>,
    #[serde(default)]
    pub opening_name: Option<String>,
    #[serde(default)]
    pub last_move: Option<String>,
    #[serde(default)]
    pub game_status: Option<String>,
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
    #[serde(default)]
    pub cleaned_pgn: Option<String>,
    #[serde(default)]
    pub possible_openings: Option<Vec<OpeningCandidate>>,
}

impl MoveResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Shared response shape for `/reset`, `/undo` and `/ai_move`.
///
/// `/undo` carries no reliable success flag at all, which is why every
/// field is optional here and the handling differs per action.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ControlResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub move_stack: Option<Vec<String>>,
}

impl ControlResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// `/get_possible_openings` response
#[derive(Deserialize, Debug, Clone)]
pub struct OpeningsResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub possible_openings: Vec<OpeningCandidate>,
}

impl OpeningsResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_grid_is_bare_array() {
        let json = r#"[
            ["r","n","b","q","k","b","n","r"],
            ["p","p","p","p","p","p","p","p"],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            ["P","P","P","P","P","P","P","P"],
            ["R","N","B","Q","K","B","N","R"]
        ]"#;

        let grid: BoardGrid = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0][0].as_deref(), Some("r"));
        assert_eq!(grid[2][0], None);
        assert_eq!(grid[7][4].as_deref(), Some("K"));
    }

    #[test]
    fn test_move_response_success_payload() {
        let json = r#"{
            "status": "success",
            "move_stack": ["1. e4 e5 2. Nf3 *"],
            "opening_name": "King's Knight Opening",
            "last_move": "g1 f3",
            "game_status": "ongoing",
            "recommendations": [
                {"Move": "Nc6", "Reason": "Center control",
                 "Probability%": "70.00%", "Source": "Bobby's Historical Data"}
            ],
            "cleaned_pgn": "1.e4 e5 2.Nf3",
            "possible_openings": [
                {"name": "Ruy Lopez", "full_line": "1. e4 e5 2. Nf3 Nc6 3. Bb5"}
            ]
        }"#;

        let response: MoveResponse = serde_json::from_str(json).expect("should deserialize");
        assert!(response.is_success());
        assert_eq!(response.move_stack.len(), 1);
        assert_eq!(response.last_move.as_deref(), Some("g1 f3"));

        let recs = response.recommendations.expect("recommendations present");
        assert_eq!(recs[0].mv.as_deref(), Some("Nc6"));
        assert_eq!(recs[0].probability.as_deref(), Some("70.00%"));
        assert_eq!(recs[0].source.as_deref(), Some("Bobby's Historical Data"));

        let openings = response.possible_openings.expect("openings present");
        assert_eq!(openings[0].name, "Ruy Lopez");
    }

    #[test]
    fn test_move_response_invalid_move() {
        let json = r#"{"status": "invalid move", "message": "Move e2e5 is not legal."}"#;

        let response: MoveResponse = serde_json::from_str(json).expect("should deserialize");
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("Move e2e5 is not legal."));
        assert!(response.move_stack.is_empty());
        assert!(response.recommendations.is_none());
    }

    #[test]
    fn test_control_response_without_status() {
        // `/undo` error bodies and terse replies may omit any of the fields
        let response: ControlResponse =
            serde_json::from_str(r#"{"move_stack": ["1. e4 *"]}"#).expect("should deserialize");
        assert!(!response.is_success());
        assert_eq!(response.move_stack, Some(vec!["1. e4 *".to_string()]));

        let empty: ControlResponse = serde_json::from_str("{}").expect("should deserialize");
        assert!(empty.status.is_none());
        assert!(empty.move_stack.is_none());
    }

    #[test]
    fn test_openings_response_error_shape() {
        let json = r#"{"status": "error", "message": "bad pgn"}"#;

        let response: OpeningsResponse = serde_json::from_str(json).expect("should deserialize");
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("bad pgn"));
        assert!(response.possible_openings.is_empty());
    }
}
