use crate::game_state::chess_types::{Color, Square};

/// (row, col) deltas of the two squares a pawn of `color` attacks.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [(i8, i8); 2] {
    let forward = color.forward();
    [(forward, -1), (forward, 1)]
}

/// On-board squares a pawn of `color` standing on `square` attacks.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    pawn_capture_offsets(color)
        .into_iter()
        .map(move |(dr, dc)| square.offset(dr, dc))
        .filter(|sq| sq.is_on_board())
}
