//! Crate root module declarations for the fen_rules chess rules engine.
//!
//! This file exposes the subsystems (position model, piece geometry, legal
//! move generation and application, FEN codec and helpers) so tests,
//! benchmarks, and embedding applications can import stable module paths.
//!
//! ```
//! use fen_rules::Position;
//!
//! let start = Position::new_game();
//! let after = start.play_algebraic("e2", "e4").expect("legal opening move");
//! assert_eq!(
//!     after.get_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult, FenError};
pub use game_state::board::Board;
pub use game_state::chess_types::{CastleSide, CastlingRights, Color, Piece, PieceKind, Square};
pub use game_state::position::{GameStatus, Position};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::{attackers_to_square, is_king_in_check, is_square_attacked};
pub use move_generation::legal_move_generator::{legal_moves, pseudo_moves};
pub use move_generation::move_generator::{GeneratedMove, MoveGenerator, PieceMoves};
pub use moves::move_descriptions::{Move, MoveKind};
