use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(position: &Position, color: Color, from: Square, out: &mut Vec<Move>) {
    let board = &position.board;
    let forward = color.forward();

    let one_step = from.offset(forward, 0);
    if board.is_empty(one_step) {
        out.push(Move::with_kind(from, one_step, MoveKind::Quiet));

        let two_step = one_step.offset(forward, 0);
        if from.row == pawn_start_row(color) && board.is_empty(two_step) {
            out.push(Move::with_kind(from, two_step, MoveKind::DoublePawnPush));
        }
    }

    // captures and en-passant
    for to in pawn_attacks(color, from) {
        match board.color_at(to) {
            Some(owner) if owner != color => {
                out.push(Move::with_kind(from, to, MoveKind::Capture));
            }
            Some(_) => {}
            None if is_en_passant_target(position, color, from, to) => {
                out.push(Move::with_kind(from, to, MoveKind::EnPassant));
            }
            None => {}
        }
    }
}

/// The target must match the position's en passant square and the pawn that
/// just double-advanced must sit beside the capturer.
fn is_en_passant_target(position: &Position, color: Color, from: Square, to: Square) -> bool {
    position.en_passant == Some(to)
        && position.board.piece_at(Square::new(from.row, to.col))
            == Some(Piece::new(color.opposite(), PieceKind::Pawn))
}
