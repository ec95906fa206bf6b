//! Perft: exhaustive legal-move tree counts.
//!
//! Used to validate the generator against published node counts. The
//! multi-threaded variant fans out one thread per root move; workers share
//! only the read-only root position and generator.

use std::panic;
use std::thread;

use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::{FastLegalMoveGenerator, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub checks: usize,
    pub discovery_checks: usize,
    pub double_checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.discovery_checks += rhs.discovery_checks;
        self.double_checks += rhs.double_checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;

        if mv.mv.is_capture() {
            self.captures += 1;
        }
        if mv.mv.kind == MoveKind::EnPassant {
            self.en_passant += 1;
        }
        if mv.mv.is_castle() {
            self.castles += 1;
        }
        if mv.annotations.gives_check {
            self.checks += 1;
        }
        if mv.annotations.is_discovery_check {
            self.discovery_checks += 1;
        }
        if mv.annotations.is_double_check {
            self.double_checks += 1;
        }
        if mv.annotations.is_checkmate {
            self.checkmates += 1;
        }
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(position)?;
    let mut total = PerftCounts::default();

    for mv in root_moves {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

/// Node counts only, without check annotations.
pub fn perft_nodes(position: &Position, depth: u8) -> MoveGenResult<usize> {
    perft(&FastLegalMoveGenerator, position, depth).map(|counts| counts.nodes)
}

/// Full tallies, including check / mate annotations.
pub fn perft_annotated(position: &Position, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&LegalMoveGenerator, position, depth)
}

pub fn perft_multi_threaded<G: MoveGenerator>(
    generator: &G,
    position: &Position,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(position)?;

    thread::scope(|scope| -> MoveGenResult<PerftCounts> {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(generator, mv, depth, 1, &mut local).map(|()| local)
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload))?;
            total.merge(local);
        }
        Ok(total)
    })
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        counts.record_leaf(mv);
        return Ok(());
    }

    let moves = generator.generate_legal_moves(&mv.game_after_move)?;
    for child in moves {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}
