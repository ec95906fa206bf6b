//! 8x8 piece placement grid.
//!
//! Every query accepts any `Square` and fails closed: off-board references
//! read as "no piece", never as a panic.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build directly from a grid indexed `[row][col]`.
    pub(crate) const fn from_cells(cells: [[Option<Piece>; 8]; 8]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.indices()?;
        self.cells[row][col]
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    /// False for off-board references as well as occupied squares.
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        square.is_on_board() && self.piece_at(square).is_none()
    }

    pub fn same_color(&self, a: Square, b: Square) -> bool {
        match (self.color_at(a), self.color_at(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }

    /// Place (or clear, with `None`) a square. Off-board writes are rejected.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> ChessResult<()> {
        let (row, col) = square
            .indices()
            .ok_or_else(|| ChessError::invalid_square(square))?;
        self.cells[row][col] = piece;
        Ok(())
    }

    /// Remove and return whatever stands on `square`.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = square.indices()?;
        self.cells[row][col].take()
    }

    /// Occupied squares in scan order (a8 first, h1 last).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| *p == piece).count()
    }

    /// Locate the unique king of `color`.
    pub fn find_king(&self, color: Color) -> ChessResult<Square> {
        let king = Piece::new(color, PieceKind::King);
        let mut found = self.pieces().filter(|(_, p)| *p == king).map(|(sq, _)| sq);

        match (found.next(), found.next()) {
            (Some(square), None) => Ok(square),
            (None, _) => Err(ChessError::InvalidKingCount { color, count: 0 }),
            (Some(_), Some(_)) => Err(ChessError::InvalidKingCount {
                color,
                count: self.count(king),
            }),
        }
    }

    /// Whether anything beyond the two kings can still deliver mate.
    ///
    /// Any pawn, rook or queen is enough. Otherwise at least two minor pieces
    /// are needed, and bishops that all share one square colour do not count.
    pub fn has_sufficient_material(&self) -> bool {
        let mut minors = 0usize;
        let mut bishop_on_light = false;
        let mut bishop_on_dark = false;
        let mut knights = 0usize;

        for (square, piece) in self.pieces() {
            match piece.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return true,
                PieceKind::King => {}
                PieceKind::Knight => {
                    minors += 1;
                    knights += 1;
                }
                PieceKind::Bishop => {
                    minors += 1;
                    if square.is_dark() {
                        bishop_on_dark = true;
                    } else {
                        bishop_on_light = true;
                    }
                }
            }
        }

        minors >= 2 && (knights > 0 || (bishop_on_light && bishop_on_dark))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
