//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by the public API. FEN
//! rejections carry a `FenError` describing which rule the input broke, so
//! callers can present a precise message without re-parsing.
//!
//! Usage guidelines:
//! - `InvalidFen` is raised only by the parser. Every later operation may
//!   assume a structurally valid position.
//! - `IllegalMove` and `InvalidSquareReference` are raised by move application
//!   before anything is built, so a rejected move never changes caller state.
//! - `InvalidKingCount` indicates a position that did not come from the parser
//!   or from applying legal moves; treat it as a logic error.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenError),

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("square reference ({row}, {col}) is off the board")]
    InvalidSquareReference { row: i8, col: i8 },

    #[error("expected exactly one {color} king, found {count}")]
    InvalidKingCount { color: Color, count: usize },

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),
}

impl ChessError {
    pub(crate) fn invalid_square(square: Square) -> Self {
        ChessError::InvalidSquareReference {
            row: square.row,
            col: square.col,
        }
    }
}

/// The individual FEN rule a rejected string violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 6 space-separated fields, found {0}")]
    FieldCount(usize),

    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} covers {files} files instead of 8")]
    RankWidth { rank: usize, files: usize },

    #[error("invalid character '{0}' in board layout")]
    PieceChar(char),

    #[error("invalid empty-square count '{0}'")]
    EmptyRun(char),

    #[error("expected exactly one {color} king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("the two kings stand on adjacent squares")]
    AdjacentKings,

    #[error("not enough material on the board to play a game")]
    InsufficientMaterial,

    #[error("the {0} king is in check but it is not {0}'s turn")]
    WaitingKingInCheck(Color),

    #[error("invalid side-to-move field: {0}")]
    SideToMove(String),

    #[error("invalid castling field: {0}")]
    Castling(String),

    #[error("invalid en passant field: {0}")]
    EnPassant(String),

    #[error("invalid halfmove clock: {0}")]
    HalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    FullmoveNumber(String),
}
