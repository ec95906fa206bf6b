//! Canonical chess-rule constants.
//!
//! Starting position, pawn ranks, and the fixed geometry of castling in grid
//! coordinates (row 7 is White's back rank, row 0 is Black's).

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Highest halfmove clock accepted by the FEN parser.
pub const MAX_HALFMOVE_CLOCK: u16 = 50;

pub const KING_START_COL: i8 = 4;

/// Row a pawn of `color` starts on (and may double-advance from).
#[inline]
pub const fn pawn_start_row(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Where the king and rook stand before and after castling on one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

impl CastlePath {
    pub const fn for_side(color: Color, side: CastleSide) -> Self {
        let row = color.back_row();
        match side {
            CastleSide::Kingside => Self {
                king_from: Square::new(row, KING_START_COL),
                king_to: Square::new(row, 6),
                rook_from: Square::new(row, 7),
                rook_to: Square::new(row, 5),
            },
            CastleSide::Queenside => Self {
                king_from: Square::new(row, KING_START_COL),
                king_to: Square::new(row, 2),
                rook_from: Square::new(row, 0),
                rook_to: Square::new(row, 3),
            },
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub fn between(self) -> impl Iterator<Item = Square> {
        let row = self.king_from.row;
        let (lo, hi) = if self.rook_from.col < self.king_from.col {
            (self.rook_from.col + 1, self.king_from.col)
        } else {
            (self.king_from.col + 1, self.rook_from.col)
        };
        (lo..hi).map(move |col| Square::new(row, col))
    }

    /// Squares the king occupies on its way, origin and destination included.
    /// None of them may be attacked.
    pub fn king_walk(self) -> impl Iterator<Item = Square> {
        let row = self.king_from.row;
        let step = (self.king_to.col - self.king_from.col).signum();
        let from = self.king_from.col;
        (0..=(self.king_to.col - from).abs()).map(move |i| Square::new(row, from + step * i))
    }
}

/// The castling side whose rook starts on `square` for `color`, if any.
pub fn castle_side_for_rook_origin(color: Color, square: Square) -> Option<CastleSide> {
    CastleSide::BOTH
        .into_iter()
        .find(|&side| CastlePath::for_side(color, side).rook_from == square)
}
