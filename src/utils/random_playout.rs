//! Uniformly random legal playouts.
//!
//! Primarily used for diagnostics and property testing: it walks a game from a
//! given position by picking legal moves at random, recording every position
//! reached.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::Move;

/// One step of a playout: the move played and the position it produced.
#[derive(Debug, Clone)]
pub struct PlayoutStep {
    pub mv: Move,
    pub position: Position,
}

/// Play up to `max_plies` random legal moves from `start`. Stops early when
/// the side to move has no legal move (checkmate or stalemate).
pub fn random_playout<R: Rng + ?Sized>(
    start: &Position,
    max_plies: usize,
    rng: &mut R,
) -> MoveGenResult<Vec<PlayoutStep>> {
    let mut steps = Vec::with_capacity(max_plies);
    let mut current = start.clone();

    for _ in 0..max_plies {
        let legal_moves = FastLegalMoveGenerator.generate_legal_moves(&current)?;
        let Some(picked) = legal_moves.choose(rng) else {
            break;
        };

        current = picked.game_after_move.clone();
        steps.push(PlayoutStep {
            mv: picked.mv,
            position: current.clone(),
        });
    }

    Ok(steps)
}
