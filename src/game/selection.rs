//! Selection resource and the two-phase click gesture
//!
//! A move is entered with two clicks: the first selects an occupied square,
//! the second names the destination and submits. The selection is cleared
//! on every completion path, success or failure.

use super::board::{BoardState, SquareId};
use bevy::prelude::*;

/// Resource storing the currently selected square, if any
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<SquareId>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }
}

/// What a square click resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Empty square clicked with nothing selected
    Ignored,
    /// First click landed on an occupied square
    Selected(SquareId),
    /// Second click completed the gesture; submit this move
    Move { from: SquareId, to: SquareId },
}

/// Resolve one click against the current selection.
///
/// Clicking the selected square again still completes the gesture, as a
/// degenerate move onto itself, which the server will reject like any other
/// illegal move.
pub fn handle_square_click(
    board: &BoardState,
    selection: &mut Selection,
    clicked: SquareId,
) -> ClickOutcome {
    match selection.selected {
        None => {
            if board.is_occupied(clicked) {
                selection.selected = Some(clicked);
                ClickOutcome::Selected(clicked)
            } else {
                ClickOutcome::Ignored
            }
        }
        Some(from) => {
            selection.clear();
            ClickOutcome::Move { from, to: clicked }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BoardGrid;

    fn board_with_pawn_at_e2() -> BoardState {
        let grid: BoardGrid = serde_json::from_str(
            r#"[
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,"P",null,null,null],
            [null,null,null,null,null,null,null,null]
        ]"#,
        )
        .unwrap();
        let mut board = BoardState::default();
        board.load_grid(&grid);
        board
    }

    const E2: SquareId = SquareId(52);
    const E4: SquareId = SquareId(36);

    #[test]
    fn test_click_empty_square_with_no_selection_is_noop() {
        let board = board_with_pawn_at_e2();
        let mut selection = Selection::default();

        let outcome = handle_square_click(&board, &mut selection, E4);
        assert_eq!(outcome, ClickOutcome::Ignored);
        assert!(!selection.is_selected());
    }

    #[test]
    fn test_click_occupied_square_selects_it() {
        let board = board_with_pawn_at_e2();
        let mut selection = Selection::default();

        let outcome = handle_square_click(&board, &mut selection, E2);
        assert_eq!(outcome, ClickOutcome::Selected(E2));
        assert_eq!(selection.selected, Some(E2));
    }

    #[test]
    fn test_second_click_submits_and_clears() {
        let board = board_with_pawn_at_e2();
        let mut selection = Selection::default();

        handle_square_click(&board, &mut selection, E2);
        let outcome = handle_square_click(&board, &mut selection, E4);
        assert_eq!(outcome, ClickOutcome::Move { from: E2, to: E4 });
        assert!(!selection.is_selected());
    }

    #[test]
    fn test_clicking_selected_square_submits_self_move() {
        let board = board_with_pawn_at_e2();
        let mut selection = Selection::default();

        handle_square_click(&board, &mut selection, E2);
        let outcome = handle_square_click(&board, &mut selection, E2);
        assert_eq!(outcome, ClickOutcome::Move { from: E2, to: E2 });
        assert!(!selection.is_selected());
    }

    #[test]
    fn test_second_click_on_empty_square_still_submits() {
        // The client does not validate destinations; the server decides.
        let board = board_with_pawn_at_e2();
        let mut selection = Selection::default();

        handle_square_click(&board, &mut selection, E2);
        let outcome = handle_square_click(&board, &mut selection, SquareId(0));
        assert_eq!(
            outcome,
            ClickOutcome::Move {
                from: E2,
                to: SquareId(0)
            }
        );
    }
}
