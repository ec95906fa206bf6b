//! Move value type.
//!
//! A move is a pair of squares plus a tag telling the applier which special
//! rule (if any) it triggers. Callers usually submit bare endpoints via
//! `Move::new`; the generator produces fully tagged moves and the applier
//! matches requests against those by endpoints.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Untagged request, as submitted by a caller who only knows endpoints.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Quiet,
        }
    }

    #[inline]
    pub const fn with_kind(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub fn same_endpoints(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }
}

/// Coordinate form, e.g. `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
