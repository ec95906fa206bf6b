use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::slider_moves::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn generate_queen_moves(position: &Position, color: Color, from: Square, out: &mut Vec<Move>) {
    push_ray_moves(&position.board, color, from, &ORTHOGONAL_DIRECTIONS, out);
    push_ray_moves(&position.board, color, from, &DIAGONAL_DIRECTIONS, out);
}
