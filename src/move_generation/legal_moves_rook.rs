//! Rook move generation.
//!
//! Emits orthogonal ray moves for the rook on a square, including captures.
//! Castling-right bookkeeping for rooks lives in the applier.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::slider_moves::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(position: &Position, color: Color, from: Square, out: &mut Vec<Move>) {
    push_ray_moves(&position.board, color, from, &ORTHOGONAL_DIRECTIONS, out);
}
