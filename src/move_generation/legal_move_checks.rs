//! Attack and check detection.
//!
//! `is_square_attacked` is the single primitive behind every check query: it
//! walks the eight rays outward from the target and tests the knight jumps,
//! so it works on any board, including hypothetical ones built while
//! filtering pseudo-legal moves.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::moves::knight_moves::knight_targets;
use crate::moves::slider_moves::{first_blocker, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn king_square(position: &Position, color: Color) -> ChessResult<Square> {
    position.board.find_king(color)
}

#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> ChessResult<bool> {
    let king_sq = king_square(position, color)?;
    Ok(is_square_attacked(&position.board, king_sq, color.opposite()))
}

/// Whether any piece of `attacker_color` attacks `square` on `board`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    for_each_attacker(board, square, attacker_color, |_, _| true)
}

/// Every piece of `attacker_color` attacking `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::<(Square, PieceKind)>::new();
    for_each_attacker(board, square, attacker_color, |sq, kind| {
        attackers.push((sq, kind));
        false
    });
    attackers
}

/// Feed each attacker to `visit`; stops early once `visit` returns true.
/// Returns whether it stopped early.
fn for_each_attacker<F>(board: &Board, square: Square, attacker_color: Color, mut visit: F) -> bool
where
    F: FnMut(Square, PieceKind) -> bool,
{
    // A pawn attacks from one row behind its own advance direction.
    let pawn_row_delta = -attacker_color.forward();

    for (directions, diagonal) in [(ORTHOGONAL_DIRECTIONS, false), (DIAGONAL_DIRECTIONS, true)] {
        for step in directions {
            let Some((blocker_sq, distance)) = first_blocker(board, square, step) else {
                continue;
            };
            let Some(piece) = board.piece_at(blocker_sq) else {
                continue;
            };
            if piece.color != attacker_color {
                continue;
            }

            let attacks = match piece.kind {
                PieceKind::Queen => true,
                PieceKind::Rook => !diagonal,
                PieceKind::Bishop => diagonal,
                PieceKind::King => distance == 1,
                PieceKind::Pawn => diagonal && distance == 1 && step.0 == pawn_row_delta,
                PieceKind::Knight => false,
            };

            if attacks && visit(blocker_sq, piece.kind) {
                return true;
            }
        }
    }

    let knight = Piece::new(attacker_color, PieceKind::Knight);
    for from in knight_targets(square) {
        if board.piece_at(from) == Some(knight) && visit(from, PieceKind::Knight) {
            return true;
        }
    }

    false
}
