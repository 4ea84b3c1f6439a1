//! Board view model
//!
//! Squares are indexed 0-63 rank-major from rank 8, matching the server's
//! board payload: index 0 is a8, index 63 is h1. This indexing is part of
//! the wire contract, the server computes UCI moves from the algebraic
//! names this module produces.

use crate::api::BoardGrid;
use bevy::prelude::*;

pub const FILES: &str = "abcdefgh";

/// Index of one board square, 0-63 rank-major from rank 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareId(pub u8);

impl SquareId {
    /// Build from grid coordinates: `row` 0 at the top (rank 8), `file` 0 = a
    pub fn from_parts(row: u8, file: u8) -> Self {
        Self(row * 8 + file)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// File 0-7 (a-h)
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Grid row 0-7, top to bottom
    pub fn row(self) -> u8 {
        self.0 / 8
    }

    /// Displayed rank number 1-8
    pub fn rank(self) -> u8 {
        8 - self.row()
    }

    /// Algebraic name, e.g. 0 -> "a8", 63 -> "h1"
    pub fn to_algebraic(self) -> String {
        let file = FILES.as_bytes()[self.file() as usize] as char;
        format!("{}{}", file, self.rank())
    }
}

/// Unicode glyph for a piece code (lowercase black, uppercase white)
pub fn piece_glyph(code: char) -> Option<char> {
    let glyph = match code {
        'r' => '♜',
        'n' => '♞',
        'b' => '♝',
        'q' => '♛',
        'k' => '♚',
        'p' => '♟',
        'R' => '♖',
        'N' => '♘',
        'B' => '♗',
        'Q' => '♕',
        'K' => '♔',
        'P' => '♙',
        _ => return None,
    };
    Some(glyph)
}

/// Resource holding the displayed board, replaced from every server payload
#[derive(Resource, Debug, Clone)]
pub struct BoardState {
    squares: [Option<char>; 64],
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
        }
    }
}

impl BoardState {
    /// Replace the whole grid from a `/get_board_state` payload
    pub fn load_grid(&mut self, grid: &BoardGrid) {
        let mut squares = [None; 64];
        for (row, rank) in grid.iter().take(8).enumerate() {
            for (file, cell) in rank.iter().take(8).enumerate() {
                squares[row * 8 + file] = cell.as_deref().and_then(|s| s.chars().next());
            }
        }
        self.squares = squares;
    }

    pub fn piece_at(&self, square: SquareId) -> Option<char> {
        self.squares[square.index()]
    }

    pub fn is_occupied(&self, square: SquareId) -> bool {
        self.piece_at(square).is_some()
    }

    /// Replay a server-confirmed move onto the displayed grid.
    ///
    /// The server already validated the move; these are display rules only.
    /// Castling drags the rook along, an en-passant capture removes the
    /// bypassed pawn, and a promotion swaps in the chosen piece glyph.
    pub fn apply_move(&mut self, from: SquareId, to: SquareId, promotion: Option<char>) {
        let Some(piece) = self.squares[from.index()] else {
            warn!("apply_move from empty square {}", from.to_algebraic());
            return;
        };

        let is_pawn = piece.eq_ignore_ascii_case(&'p');
        let is_king = piece.eq_ignore_ascii_case(&'k');

        // Pawn landing diagonally on an empty square is en passant
        if is_pawn && from.file() != to.file() && self.squares[to.index()].is_none() {
            let bypassed = SquareId::from_parts(from.row(), to.file());
            self.squares[bypassed.index()] = None;
        }

        // King sliding two files is castling
        if is_king && from.file().abs_diff(to.file()) == 2 {
            let row = from.row();
            let (rook_from, rook_to) = if to.file() > from.file() {
                (SquareId::from_parts(row, 7), SquareId::from_parts(row, 5))
            } else {
                (SquareId::from_parts(row, 0), SquareId::from_parts(row, 3))
            };
            self.squares[rook_to.index()] = self.squares[rook_from.index()].take();
        }

        let placed = match promotion {
            Some(choice) if is_pawn => {
                if piece.is_ascii_uppercase() {
                    choice.to_ascii_uppercase()
                } else {
                    choice.to_ascii_lowercase()
                }
            }
            _ => piece,
        };

        self.squares[from.index()] = None;
        self.squares[to.index()] = Some(placed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> SquareId {
        let bytes = name.as_bytes();
        let file = bytes[0] - b'a';
        let rank = bytes[1] - b'0';
        SquareId::from_parts(8 - rank, file)
    }

    #[test]
    fn test_index_to_algebraic_contract() {
        assert_eq!(SquareId(0).to_algebraic(), "a8");
        assert_eq!(SquareId(63).to_algebraic(), "h1");
        assert_eq!(SquareId(4).to_algebraic(), "e8");
    }

    #[test]
    fn test_from_parts_round_trip() {
        for id in 0..64 {
            let square = SquareId(id);
            assert_eq!(SquareId::from_parts(square.row(), square.file()), square);
        }
    }

    #[test]
    fn test_load_grid_start_position() {
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
        let grid: BoardGrid = serde_json::from_str(json).unwrap();

        let mut board = BoardState::default();
        board.load_grid(&grid);

        assert_eq!(board.piece_at(sq("a8")), Some('r'));
        assert_eq!(board.piece_at(sq("e1")), Some('K'));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert!(board.is_occupied(sq("e2")));
    }

    #[test]
    fn test_apply_simple_move_and_capture() {
        let mut board = BoardState::default();
        board.load_grid(
            &serde_json::from_str(
                r#"[
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,"p",null,null,null,null],
            [null,null,null,null,"P",null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null]
        ]"#,
            )
            .unwrap(),
        );

        board.apply_move(sq("e4"), sq("d5"), None);
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.piece_at(sq("d5")), Some('P'));
    }

    #[test]
    fn test_apply_kingside_castle_moves_rook() {
        let mut board = BoardState::default();
        board.load_grid(
            &serde_json::from_str(
                r#"[
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,"K",null,null,"R"]
        ]"#,
            )
            .unwrap(),
        );

        board.apply_move(sq("e1"), sq("g1"), None);
        assert_eq!(board.piece_at(sq("g1")), Some('K'));
        assert_eq!(board.piece_at(sq("f1")), Some('R'));
        assert_eq!(board.piece_at(sq("h1")), None);
        assert_eq!(board.piece_at(sq("e1")), None);
    }

    #[test]
    fn test_apply_queenside_castle_black() {
        let mut board = BoardState::default();
        board.load_grid(
            &serde_json::from_str(
                r#"[
            ["r",null,null,null,"k",null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null]
        ]"#,
            )
            .unwrap(),
        );

        board.apply_move(sq("e8"), sq("c8"), None);
        assert_eq!(board.piece_at(sq("c8")), Some('k'));
        assert_eq!(board.piece_at(sq("d8")), Some('r'));
        assert_eq!(board.piece_at(sq("a8")), None);
    }

    #[test]
    fn test_apply_en_passant_removes_bypassed_pawn() {
        let mut board = BoardState::default();
        board.load_grid(
            &serde_json::from_str(
                r#"[
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,"p","P",null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null]
        ]"#,
            )
            .unwrap(),
        );

        board.apply_move(sq("e5"), sq("d6"), None);
        assert_eq!(board.piece_at(sq("d6")), Some('P'));
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.piece_at(sq("e5")), None);
    }

    #[test]
    fn test_apply_promotion_uses_chosen_piece() {
        let mut board = BoardState::default();
        board.load_grid(
            &serde_json::from_str(
                r#"[
            [null,null,null,null,null,null,null,null],
            ["P",null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,"p",null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null]
        ]"#,
            )
            .unwrap(),
        );

        board.apply_move(sq("a7"), sq("a8"), Some('q'));
        assert_eq!(board.piece_at(sq("a8")), Some('Q'));

        board.apply_move(sq("b2"), sq("b1"), Some('n'));
        assert_eq!(board.piece_at(sq("b1")), Some('n'));
    }

    #[test]
    fn test_piece_glyphs_match_server_codes() {
        assert_eq!(piece_glyph('P'), Some('♙'));
        assert_eq!(piece_glyph('p'), Some('♟'));
        assert_eq!(piece_glyph('K'), Some('♔'));
        assert_eq!(piece_glyph('x'), None);
    }
}
