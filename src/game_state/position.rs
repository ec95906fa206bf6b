//! Immutable position snapshot.
//!
//! `Position` is the value threaded through every engine call. Transitions
//! (`play`, `apply_move`) return a new value; nothing is mutated behind the
//! caller's back, so hypothetical positions used during legality checking
//! never leak into the caller's state.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator, PieceMoves};
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u32,
}

impl Position {
    /// The standard starting position, built without going through the parser.
    pub fn new_game() -> Self {
        let mut cells = [[None; 8]; 8];
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for color in [Color::White, Color::Black] {
            let back_row = color.back_row() as usize;
            let pawn_row = pawn_start_row(color) as usize;
            for (col, kind) in back_rank.into_iter().enumerate() {
                cells[back_row][col] = Some(Piece::new(color, kind));
                cells[pawn_row][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }

        Self {
            board: Board::from_cells(cells),
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> ChessResult<Square> {
        self.board.find_king(color)
    }

    /// Whether the side to move is in check.
    pub fn is_in_check(&self) -> ChessResult<bool> {
        is_king_in_check(self, self.side_to_move)
    }

    /// Legal moves grouped per piece of the side to move, in board scan order.
    pub fn legal_moves(&self) -> ChessResult<Vec<PieceMoves>> {
        legal_moves(self)
    }

    /// Legal moves of the piece on `from`; empty for empty squares, enemy
    /// pieces, and off-board references.
    pub fn legal_moves_from(&self, from: Square) -> ChessResult<Vec<Move>> {
        Ok(self
            .legal_moves()?
            .into_iter()
            .find(|entry| entry.square == from)
            .map(|entry| entry.moves)
            .unwrap_or_default())
    }

    pub fn status(&self) -> ChessResult<GameStatus> {
        let in_check = self.is_in_check()?;
        let has_moves = self.legal_moves()?.iter().any(|entry| !entry.moves.is_empty());

        Ok(match (in_check, has_moves) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        })
    }

    /// Apply a legal move given by its endpoints.
    pub fn play(&self, from: Square, to: Square) -> ChessResult<Position> {
        apply_move(self, Move::new(from, to))
    }

    /// `play` with algebraic coordinates, e.g. `("e2", "e4")`.
    pub fn play_algebraic(&self, from: &str, to: &str) -> ChessResult<Position> {
        let parse = |name: &str| {
            algebraic_to_square(name).ok_or_else(|| ChessError::InvalidAlgebraic(name.to_owned()))
        };
        self.play(parse(from)?, parse(to)?)
    }

    /// Every legal move with its successor position and check annotations.
    pub fn generated_moves(&self) -> ChessResult<Vec<GeneratedMove>> {
        LegalMoveGenerator.generate_legal_moves(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}
