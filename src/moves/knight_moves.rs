use crate::game_state::chess_types::Square;

/// (row, col) deltas of the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight destinations from `square`, in offset order.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .map(move |(dr, dc)| square.offset(dr, dc))
        .filter(|sq| sq.is_on_board())
}
