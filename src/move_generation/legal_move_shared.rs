//! Occupancy rules shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::slider_moves::RayWalk;

/// Push a step move (knight/king) onto `to` unless a friendly piece stands
/// there. An enemy piece makes it a capture.
#[inline]
pub fn push_step_move(board: &Board, color: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    match board.color_at(to) {
        None => out.push(Move::with_kind(from, to, MoveKind::Quiet)),
        Some(owner) if owner != color => out.push(Move::with_kind(from, to, MoveKind::Capture)),
        Some(_) => {}
    }
}

/// Walk each direction from `from`, pushing empty squares and the first enemy
/// piece. A friendly blocker ends the ray without being added.
pub fn push_ray_moves(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &step in directions {
        for to in RayWalk::new(board, from, step) {
            push_step_move(board, color, from, to, out);
        }
    }
}
