//! Move application.
//!
//! `apply_move` is the public entry point: it rejects anything that is not in
//! the legal set before building a successor, so a failed call leaves the
//! caller's position exactly as it was. `apply_pseudo_move` performs the board
//! and state transition itself and is what the generator uses to build the
//! scratch positions it tests for self-check.

use tracing::{debug, trace};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castle_side_for_rook_origin, CastlePath, MAX_HALFMOVE_CLOCK};
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, MoveKind};

/// Apply `requested` if a legal move with the same endpoints exists for the
/// side to move; the tag on `requested` is ignored.
pub fn apply_move(position: &Position, requested: Move) -> ChessResult<Position> {
    for square in [requested.from, requested.to] {
        if !square.is_on_board() {
            return Err(ChessError::invalid_square(square));
        }
    }

    let legal = FastLegalMoveGenerator.generate_legal_moves(position)?;
    let Some(found) = legal
        .into_iter()
        .find(|generated| generated.mv.same_endpoints(&requested))
    else {
        debug!(
            from = %requested.from,
            to = %requested.to,
            side = %position.side_to_move,
            "rejected illegal move"
        );
        return Err(ChessError::IllegalMove {
            from: requested.from,
            to: requested.to,
        });
    };

    Ok(found.game_after_move)
}

/// Execute a generator-tagged move without checking legality.
pub fn apply_pseudo_move(position: &Position, mv: Move) -> ChessResult<Position> {
    let illegal = || ChessError::IllegalMove {
        from: mv.from,
        to: mv.to,
    };
    let moved = position.board.piece_at(mv.from).ok_or_else(illegal)?;
    let mover = moved.color;
    let captured = match mv.kind {
        MoveKind::EnPassant => Some(Piece::new(mover.opposite(), PieceKind::Pawn)),
        _ => position.board.piece_at(mv.to),
    };

    let mut next = position.clone();

    update_castling_rights(&mut next.castling_rights, moved, mv, captured);

    match mv.kind {
        MoveKind::EnPassant => {
            next.board.take(Square::new(mv.from.row, mv.to.col));
        }
        MoveKind::Castle(side) => {
            let path = CastlePath::for_side(mover, side);
            let rook = next.board.take(path.rook_from).ok_or_else(illegal)?;
            next.board.set(path.rook_to, Some(rook))?;
        }
        MoveKind::Quiet | MoveKind::Capture | MoveKind::DoublePawnPush => {}
    }

    next.board.take(mv.from);
    next.board.set(mv.to, Some(moved))?;

    next.en_passant = match mv.kind {
        MoveKind::DoublePawnPush => Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col)),
        _ => None,
    };

    if moved.kind == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        // Held at the parser's cap so every reachable position reparses.
        next.halfmove_clock = (next.halfmove_clock + 1).min(MAX_HALFMOVE_CLOCK);
    }
    if mover == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = mover.opposite();

    trace!(mv = %mv, kind = ?mv.kind, piece = ?moved.kind, "applied move");

    Ok(next)
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    moved: Piece,
    mv: Move,
    captured: Option<Piece>,
) {
    match moved.kind {
        PieceKind::King => rights.revoke_all(moved.color),
        PieceKind::Rook => {
            if let Some(side) = castle_side_for_rook_origin(moved.color, mv.from) {
                rights.revoke(moved.color, side);
            }
        }
        _ => {}
    }

    // Capturing rook on original squares also removes rights.
    if let Some(victim) = captured.filter(|p| p.kind == PieceKind::Rook) {
        if let Some(side) = castle_side_for_rook_origin(victim.color, mv.to) {
            rights.revoke(victim.color, side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square name")
    }

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("valid FEN")
    }

    fn play(position: &Position, from: &str, to: &str) -> Position {
        apply_move(position, Move::new(sq(from), sq(to))).expect("move should be legal")
    }

    #[test]
    fn double_push_sets_target_and_next_move_clears_it() {
        let start = Position::new_game();
        let after_e4 = play(&start, "e2", "e4");
        assert_eq!(after_e4.en_passant, Some(sq("e3")));
        assert_eq!(after_e4.side_to_move, Color::Black);
        assert_eq!(after_e4.fullmove_number, 1);

        let after_nf6 = play(&after_e4, "g8", "f6");
        assert_eq!(after_nf6.en_passant, None);
        assert_eq!(after_nf6.fullmove_number, 2);
        assert_eq!(after_nf6.halfmove_clock, 1);
    }

    #[test]
    fn halfmove_clock_stays_within_parser_range() {
        let p = position("4k3/8/8/8/8/8/8/R3K3 w - - 50 1");
        let next = play(&p, "a1", "a2");

        assert_eq!(next.halfmove_clock, 50);
        assert_eq!(next.get_fen(), "4k3/8/8/8/8/8/R7/4K3 b - - 50 1");
        assert_eq!(
            Position::from_fen(&next.get_fen()).expect("generated FEN parses"),
            next
        );

        let reset = play(&position("4k3/8/8/8/8/8/P7/4K3 w - - 50 1"), "a2", "a3");
        assert_eq!(reset.halfmove_clock, 0);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let p = position("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
        let next = play(&p, "e5", "d6");

        assert_eq!(next.piece_at(sq("d5")), None);
        assert_eq!(next.piece_at(sq("e5")), None);
        assert_eq!(
            next.piece_at(sq("d6")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(next.halfmove_clock, 0);
        assert_eq!(
            next.get_fen(),
            "rnbqkbnr/ppp1pppp/3P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"
        );
    }

    #[test]
    fn castling_relocates_rook_and_clears_rights() {
        let p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 3 10");

        let kingside = play(&p, "e1", "g1");
        assert_eq!(
            kingside.get_fen(),
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R4RK1 b kq - 4 10"
        );

        let queenside = play(&kingside, "e8", "c8");
        assert_eq!(
            queenside.get_fen(),
            "2kr3r/pppppppp/8/8/8/8/PPPPPPPP/R4RK1 w - - 5 11"
        );
    }

    #[test]
    fn rook_move_revokes_only_its_side() {
        let p = position("r3k2r/pppppppp/8/8/8/8/1PPPPPPP/R3K2R w KQkq - 0 1");
        let next = play(&p, "a1", "a5");
        assert!(!next.castling_rights.white_queenside);
        assert!(next.castling_rights.white_kingside);
        assert!(next.castling_rights.black_kingside && next.castling_rights.black_queenside);
    }

    #[test]
    fn capturing_a_home_rook_revokes_the_victims_right() {
        let p = position("r3k2r/1ppppppp/8/8/8/8/1PPPPPPP/R3K2R w KQkq - 0 1");
        let next = play(&p, "a1", "a8");
        assert!(!next.castling_rights.white_queenside);
        assert!(!next.castling_rights.black_queenside);
        assert!(next.castling_rights.black_kingside);
        assert_eq!(next.halfmove_clock, 0);
    }

    #[test]
    fn king_move_revokes_both_rights() {
        let p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");
        let next = play(&p, "e8", "f8");
        assert!(!next.castling_rights.black_kingside);
        assert!(!next.castling_rights.black_queenside);
        assert!(next.castling_rights.white_kingside);
    }

    #[test]
    fn illegal_move_is_rejected_without_mutation() {
        let start = Position::new_game();
        let before = start.clone();

        assert_eq!(
            apply_move(&start, Move::new(sq("e2"), sq("e5"))),
            Err(ChessError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(
            apply_move(&start, Move::new(sq("e7"), sq("e5"))),
            Err(ChessError::IllegalMove {
                from: sq("e7"),
                to: sq("e5")
            })
        );
        assert_eq!(start, before);
    }

    #[test]
    fn off_board_endpoint_is_rejected() {
        let start = Position::new_game();
        assert_eq!(
            apply_move(&start, Move::new(sq("e2"), Square::new(-1, 4))),
            Err(ChessError::InvalidSquareReference { row: -1, col: 4 })
        );
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // The e2 knight shields its king from the e8 rook.
        let p = position("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(matches!(
            apply_move(&p, Move::new(sq("e2"), sq("c3"))),
            Err(ChessError::IllegalMove { .. })
        ));
    }
}
