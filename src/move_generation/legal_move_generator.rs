//! Full legal move generation pipeline.
//!
//! Dispatches pseudo-legal generation per piece kind, applies each candidate
//! to a scratch position, filters moves that leave the mover's king attacked,
//! and optionally annotates checking moves.

use tracing::trace;

use crate::game_state::chess_rules::CastlePath;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::apply_pseudo_move;
use crate::move_generation::legal_move_checks::{
    attackers_to_square, is_king_in_check, is_square_attacked, king_square,
};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveAnnotations, MoveGenResult, MoveGenerator, PieceMoves,
};
use crate::moves::move_descriptions::{Move, MoveKind};

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(position, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(position, false)
    }
}

/// Pseudo-legal moves of the piece on `from`, whichever side owns it.
/// Empty for empty or off-board squares.
pub fn pseudo_moves(position: &Position, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    let Some(piece) = position.board.piece_at(from) else {
        return out;
    };

    let generate = match piece.kind {
        PieceKind::Pawn => generate_pawn_moves,
        PieceKind::Knight => generate_knight_moves,
        PieceKind::Bishop => generate_bishop_moves,
        PieceKind::Rook => generate_rook_moves,
        PieceKind::Queen => generate_queen_moves,
        PieceKind::King => generate_king_moves,
    };
    generate(position, piece.color, from, &mut out);

    out
}

/// Legal moves grouped per piece of the side to move, in board scan order.
/// Pieces without a legal move still get an (empty) entry.
pub fn legal_moves(position: &Position) -> MoveGenResult<Vec<PieceMoves>> {
    let generated = generate_legal_moves_internal(position, false)?;

    Ok(position
        .board
        .pieces_of(position.side_to_move)
        .map(|(square, piece)| PieceMoves {
            square,
            piece,
            moves: generated
                .iter()
                .filter(|g| g.mv.from == square)
                .map(|g| g.mv)
                .collect(),
        })
        .collect())
}

fn generate_legal_moves_internal(
    position: &Position,
    annotate: bool,
) -> MoveGenResult<Vec<GeneratedMove>> {
    let side = position.side_to_move;
    let enemy = side.opposite();
    // Fails early on a board without exactly one king for the mover.
    let in_check = is_king_in_check(position, side)?;

    let mut legal = Vec::<GeneratedMove>::with_capacity(64);
    for (from, piece) in position.board.pieces_of(side) {
        for mv in pseudo_moves(position, from) {
            if let MoveKind::Castle(castle_side) = mv.kind {
                if in_check || castle_path_attacked(position, side, castle_side) {
                    continue;
                }
            }

            let next = apply_pseudo_move(position, mv)?;

            // Illegal if own king is in check after move.
            let own_king = king_square(&next, side)?;
            if is_square_attacked(&next.board, own_king, enemy) {
                continue;
            }

            let annotations = if annotate {
                classify_move_annotations(mv, &next)?
            } else {
                MoveAnnotations::default()
            };

            legal.push(GeneratedMove {
                mv,
                piece,
                game_after_move: next,
                annotations,
            });
        }
    }

    trace!(side = %side, count = legal.len(), "generated legal moves");

    Ok(legal)
}

/// The king may not pass through or land on an attacked square.
fn castle_path_attacked(position: &Position, side: Color, castle_side: CastleSide) -> bool {
    CastlePath::for_side(side, castle_side)
        .king_walk()
        .any(|sq| is_square_attacked(&position.board, sq, side.opposite()))
}

fn classify_move_annotations(mv: Move, next: &Position) -> MoveGenResult<MoveAnnotations> {
    let defender = next.side_to_move;
    let defender_king_sq = king_square(next, defender)?;

    let checkers = attackers_to_square(&next.board, defender_king_sq, defender.opposite());
    if checkers.is_empty() {
        return Ok(MoveAnnotations::default());
    }

    let moved_piece_is_checker = checkers.iter().any(|(sq, _)| *sq == mv.to)
        || matches!(mv.kind, MoveKind::Castle(side)
            if checkers.iter().any(|(sq, _)| *sq == CastlePath::for_side(defender.opposite(), side).rook_to));

    let is_double_check = checkers.len() >= 2;
    let is_discovery_check = !is_double_check && !moved_piece_is_checker;

    let reply_count = generate_legal_moves_internal(next, false)?.len();

    Ok(MoveAnnotations {
        gives_check: true,
        is_discovery_check,
        is_double_check,
        is_checkmate: reply_count == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::random_playout::random_playout;
    use rand::{rngs::StdRng, SeedableRng};

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square name")
    }

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("valid FEN")
    }

    fn castles(position: &Position) -> Vec<Move> {
        FastLegalMoveGenerator
            .generate_legal_moves(position)
            .expect("generation should succeed")
            .into_iter()
            .map(|g| g.mv)
            .filter(Move::is_castle)
            .collect()
    }

    #[test]
    fn fast_generator_matches_legal_move_count_on_startpos() {
        let game = position(STARTING_POSITION_FEN);
        let annotated = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("annotated move generation should succeed");
        let fast = FastLegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("fast move generation should succeed");
        assert_eq!(annotated.len(), fast.len());
        assert_eq!(fast.len(), 20);
    }

    #[test]
    fn grouped_moves_cover_every_white_piece_in_scan_order() {
        let grouped = legal_moves(&Position::new_game()).expect("generation");
        assert_eq!(grouped.len(), 16);
        assert_eq!(grouped[0].square, sq("a2"));
        assert_eq!(grouped[15].square, sq("h1"));

        let total: usize = grouped.iter().map(|entry| entry.moves.len()).sum();
        assert_eq!(total, 20);

        let rook = grouped.iter().find(|e| e.square == sq("a1")).expect("a1 rook");
        assert!(rook.moves.is_empty());
    }

    #[test]
    fn king_in_severe_check_has_two_escapes() {
        let p = position("r1bqk2r/pppp1Bpp/2n5/8/3P4/1Q3N2/P4PPP/b1B2RK1 b kq - 0 11");
        let moves: Vec<Move> = FastLegalMoveGenerator
            .generate_legal_moves(&p)
            .expect("generation")
            .into_iter()
            .map(|g| g.mv)
            .collect();

        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.from == sq("e8")));
        let mut targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        targets.sort();
        assert_eq!(targets, vec![sq("f8"), sq("e7")]);
    }

    #[test]
    fn castling_allowed_when_every_precondition_holds() {
        let p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let moves = castles(&p);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::with_kind(
            sq("e1"),
            sq("g1"),
            MoveKind::Castle(CastleSide::Kingside)
        )));
        assert!(moves.contains(&Move::with_kind(
            sq("e1"),
            sq("c1"),
            MoveKind::Castle(CastleSide::Queenside)
        )));
    }

    #[test]
    fn castling_removed_when_right_is_cleared() {
        let p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w Qkq - 0 1");
        let moves = castles(&p);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("c1"));
    }

    #[test]
    fn castling_removed_when_path_is_blocked() {
        // Knight on b1 blocks the queenside even though the king never crosses b1.
        let p = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/RN2K2R w KQkq - 0 1");
        let moves = castles(&p);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("g1"));
    }

    #[test]
    fn castling_removed_when_king_is_in_check() {
        let p = position("r3k2r/pppp1ppp/8/8/8/8/PPPP1PPP/R3K2R w KQkq - 0 1");
        let p = Position {
            board: {
                let mut board = p.board.clone();
                board
                    .set(sq("e4"), Some(Piece::new(Color::Black, PieceKind::Rook)))
                    .expect("on board");
                board
            },
            ..p
        };
        assert!(p.is_in_check().expect("king present"));
        assert!(castles(&p).is_empty());
    }

    #[test]
    fn castling_removed_when_king_passes_through_attack() {
        // Black rook on f8 covers f1 through the open f-file.
        let p = position("4kr2/pppp2pp/8/8/8/8/PPPP2PP/R3K2R w KQ - 0 1");
        let moves = castles(&p);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("c1"));
    }

    #[test]
    fn castling_removed_when_landing_square_is_attacked() {
        // Black bishop on c5 hits g1.
        let p = position("4k3/pppp1ppp/8/2b5/8/8/PPPPP2P/R3K2R w KQ - 0 1");
        let moves = castles(&p);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("c1"));
    }

    #[test]
    fn queenside_b_file_attack_does_not_stop_castling() {
        // b1 is attacked but the king never crosses it.
        let p = position("1r2k3/p1pppppp/8/8/8/8/P1PPPPPP/R3K3 w Q - 0 1");
        let moves = castles(&p);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("c1"));
    }

    #[test]
    fn en_passant_appears_once_and_only_for_the_adjacent_pawn() {
        let p = position("4k3/8/8/8/1p1p4/8/2P5/4K3 w - - 0 1");
        let after = p.play(sq("c2"), sq("c4")).expect("double push is legal");
        assert_eq!(after.en_passant, Some(sq("c3")));

        let ep: Vec<Move> = LegalMoveGenerator
            .generate_legal_moves(&after)
            .expect("generation")
            .into_iter()
            .map(|g| g.mv)
            .filter(|m| m.kind == MoveKind::EnPassant)
            .collect();
        assert_eq!(ep.len(), 2);
        assert!(ep.iter().all(|m| m.to == sq("c3")));

        // A different move forfeits the capture.
        let later = after.play(sq("b4"), sq("b3")).expect("push is legal");
        assert_eq!(later.en_passant, None);
        let later = later.play(sq("e1"), sq("e2")).expect("king step is legal");
        assert!(later
            .legal_moves()
            .expect("generation")
            .iter()
            .flat_map(|e| e.moves.iter())
            .all(|m| m.kind != MoveKind::EnPassant));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        // Capturing d6 would clear rank 5 between the a5 rook and the h5 king.
        let p = position("8/8/8/r2pP2K/8/8/8/k7 w - d6 0 1");
        let ep = FastLegalMoveGenerator
            .generate_legal_moves(&p)
            .expect("generation")
            .into_iter()
            .filter(|g| g.mv.kind == MoveKind::EnPassant)
            .count();
        assert_eq!(ep, 0);
    }

    #[test]
    fn kings_never_step_next_to_each_other() {
        let p = position("8/8/8/3k4/8/3K4/8/7R w - - 0 1");
        let king_targets: Vec<Square> = p
            .legal_moves_from(sq("d3"))
            .expect("generation")
            .into_iter()
            .map(|m| m.to)
            .collect();
        for forbidden in ["c4", "d4", "e4"] {
            assert!(!king_targets.contains(&sq(forbidden)));
        }
        assert!(king_targets.contains(&sq("d2")));
    }

    #[test]
    fn annotations_flag_checks_and_mate() {
        // Back-rank mate with Re1-e8.
        let p = position("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1");
        let generated = LegalMoveGenerator.generate_legal_moves(&p).expect("generation");
        let mate = generated
            .iter()
            .find(|g| g.mv.from == sq("e1") && g.mv.to == sq("e8"))
            .expect("Re8 is legal");
        assert!(mate.annotations.gives_check);
        assert!(mate.annotations.is_checkmate);
        assert!(!mate.annotations.is_discovery_check);

        let quiet = generated
            .iter()
            .find(|g| g.mv.from == sq("e1") && g.mv.to == sq("e2"))
            .expect("Re2 is legal");
        assert_eq!(quiet.annotations, MoveAnnotations::default());
    }

    #[test]
    fn annotations_flag_discovered_check() {
        // Moving the d4 bishop off the d-file uncovers the d1 rook on d8.
        let p = position("3k4/8/8/8/3B4/8/8/3RK3 w - - 0 1");
        let generated = LegalMoveGenerator.generate_legal_moves(&p).expect("generation");
        let discovered = generated
            .iter()
            .find(|g| g.mv.from == sq("d4") && g.mv.to == sq("e5"))
            .expect("Be5 is legal");
        assert!(discovered.annotations.gives_check);
        assert!(discovered.annotations.is_discovery_check);
        assert!(!discovered.annotations.is_double_check);
    }

    #[test]
    fn pseudo_moves_ignore_side_to_move() {
        let start = Position::new_game();
        assert_eq!(pseudo_moves(&start, sq("b8")).len(), 2);
        assert!(pseudo_moves(&start, sq("e4")).is_empty());
        assert!(pseudo_moves(&start, Square::new(9, 9)).is_empty());
    }

    #[test]
    fn no_legal_move_ever_lands_on_a_king() {
        let starts = [
            Position::new_game(),
            position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
            position("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1"),
        ];

        for (seed, start) in (0u64..).zip(starts) {
            let playout = random_playout(&start, 80, &mut StdRng::seed_from_u64(seed))
                .expect("playout");
            let reached = std::iter::once(start).chain(playout.into_iter().map(|s| s.position));

            for p in reached {
                for generated in FastLegalMoveGenerator.generate_legal_moves(&p).expect("generation") {
                    assert_ne!(
                        p.piece_at(generated.mv.to).map(|piece| piece.kind),
                        Some(PieceKind::King),
                        "{} captures a king in {}",
                        generated.mv,
                        p.get_fen()
                    );
                    assert!(generated.game_after_move.king_square(Color::White).is_ok());
                    assert!(generated.game_after_move.king_square(Color::Black).is_ok());
                }
            }
        }
    }
}
