//! Ray walking for sliding pieces.
//!
//! Shared by move generation (bishop/rook/queen destinations) and by attack
//! detection, which walks the same rays outward from the target square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares along one direction from `origin` (exclusive), stopping at the
/// board edge or after the first occupied square, which is yielded.
pub struct RayWalk<'a> {
    board: &'a Board,
    current: Square,
    step: (i8, i8),
    blocked: bool,
}

impl<'a> RayWalk<'a> {
    #[inline]
    pub fn new(board: &'a Board, origin: Square, step: (i8, i8)) -> Self {
        Self {
            board,
            current: origin,
            step,
            blocked: false,
        }
    }
}

impl Iterator for RayWalk<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.blocked {
            return None;
        }

        let next = self.current.offset(self.step.0, self.step.1);
        if !next.is_on_board() {
            self.blocked = true;
            return None;
        }

        self.current = next;
        if self.board.piece_at(next).is_some() {
            self.blocked = true;
        }
        Some(next)
    }
}

/// The first occupied square along a ray and its distance from `origin`.
#[inline]
pub fn first_blocker(board: &Board, origin: Square, step: (i8, i8)) -> Option<(Square, usize)> {
    RayWalk::new(board, origin, step)
        .enumerate()
        .last()
        .filter(|(_, sq)| board.piece_at(*sq).is_some())
        .map(|(i, sq)| (sq, i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn open_ray_runs_to_the_edge() {
        let board = Board::empty();
        let squares: Vec<Square> = RayWalk::new(&board, Square::new(7, 0), (-1, 0)).collect();
        assert_eq!(squares.len(), 7);
        assert_eq!(squares.last(), Some(&Square::new(0, 0)));
        assert_eq!(first_blocker(&board, Square::new(7, 0), (-1, 0)), None);
    }

    #[test]
    fn blocker_stops_ray_inclusively() {
        let mut board = Board::empty();
        let blocker = Square::new(4, 0);
        board
            .set(blocker, Some(Piece::new(Color::Black, PieceKind::Knight)))
            .expect("on board");

        let squares: Vec<Square> = RayWalk::new(&board, Square::new(7, 0), (-1, 0)).collect();
        assert_eq!(
            squares,
            vec![Square::new(6, 0), Square::new(5, 0), Square::new(4, 0)]
        );
        assert_eq!(
            first_blocker(&board, Square::new(7, 0), (-1, 0)),
            Some((blocker, 3))
        );
    }
}
