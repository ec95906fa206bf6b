use crate::game_state::chess_types::Square;

/// (row, col) deltas of the eight adjacent squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .map(move |(dr, dc)| square.offset(dr, dc))
        .filter(|sq| sq.is_on_board())
}
