//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and grid squares
//! reused by the FEN codec and the `play_algebraic` convenience.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a grid square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    let &[file, rank] = square.as_bytes() else {
        return None;
    };

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    let col = (file - b'a') as i8;
    let row = 7 - (rank - b'1') as i8;
    Some(Square::new(row, col))
}

/// Convert a grid square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if !square.is_on_board() {
        return Err(ChessError::invalid_square(square));
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'8' - square.row as u8);

    Ok(format!("{file_char}{rank_char}"))
}
