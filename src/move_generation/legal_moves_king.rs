//! King move generation.
//!
//! Castling is emitted here only as a pseudo-legal move: rights, piece
//! placement and empty squares are checked, while the "not in, through or
//! into check" conditions are left to the legality filter.

use crate::game_state::chess_rules::CastlePath;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn generate_king_moves(position: &Position, color: Color, from: Square, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        push_step_move(&position.board, color, from, to, out);
    }

    generate_castling_moves(position, color, from, out);
}

fn generate_castling_moves(position: &Position, color: Color, king_from: Square, out: &mut Vec<Move>) {
    let board = &position.board;

    for side in CastleSide::BOTH {
        let path = CastlePath::for_side(color, side);
        if !position.castling_rights.get(color, side) || king_from != path.king_from {
            continue;
        }

        let pieces_home = board.piece_at(path.king_from) == Some(Piece::new(color, PieceKind::King))
            && board.piece_at(path.rook_from) == Some(Piece::new(color, PieceKind::Rook));
        if pieces_home && path.between().all(|sq| board.is_empty(sq)) {
            out.push(Move::with_kind(path.king_from, path.king_to, MoveKind::Castle(side)));
        }
    }
}
