use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{Piece, Square};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_discovery_check: bool,
    pub is_double_check: bool,
    pub is_checkmate: bool,
}

/// A legal move together with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub piece: Piece,
    pub game_after_move: Position,
    pub annotations: MoveAnnotations,
}

/// Legal moves of one piece of the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceMoves {
    pub square: Square,
    pub piece: Piece,
    pub moves: Vec<Move>,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, position: &Position) -> MoveGenResult<Vec<GeneratedMove>>;
}
