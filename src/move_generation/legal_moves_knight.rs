use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(position: &Position, color: Color, from: Square, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        push_step_move(&position.board, color, from, to, out);
    }
}
