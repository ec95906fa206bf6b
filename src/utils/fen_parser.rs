//! FEN-to-Position parser.
//!
//! Builds a fully validated `Position` from a Forsyth-Edwards Notation string.
//! Validation is both syntactic (field shapes) and semantic (one king per
//! colour, kings apart, enough material to play), so every later engine call
//! can trust the board it is handed.
//!
//! The halfmove clock is capped at 50, which is stricter than standard FEN.

use tracing::debug;

use crate::chess_errors::{ChessResult, FenError};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::MAX_HALFMOVE_CLOCK;
use crate::game_state::chess_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    parse_fields(fen).map_err(|err| {
        debug!(fen, reason = %err, "rejected FEN");
        err.into()
    })
}

fn parse_fields(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        return Err(FenError::FieldCount(fields.len()));
    };

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    validate_board(&board, side_to_move)?;

    Ok(Position {
        board,
        side_to_move,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant: parse_en_passant_square(en_passant_part)?,
        halfmove_clock: parse_halfmove_clock(halfmove_part)?,
        fullmove_number: parse_counter(fullmove_part)
            .ok_or_else(|| FenError::FullmoveNumber(fullmove_part.to_owned()))?,
    })
}

fn parse_board(board_part: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();

    for (row, rank_str) in (0i8..).zip(&ranks) {
        let rank = 8 - row as usize;
        let mut files = 0usize;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::EmptyRun(ch));
                }
                files += run as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;
            if files >= 8 {
                return Err(FenError::RankWidth {
                    rank,
                    files: files + 1,
                });
            }

            board
                .set(Square::new(row, files as i8), Some(piece))
                .map_err(|_| FenError::RankWidth { rank, files })?;
            files += 1;
        }

        if files != 8 {
            return Err(FenError::RankWidth { rank, files });
        }
    }

    Ok(board)
}

/// The side that just moved can never have left its own king attacked.
fn validate_board(board: &Board, side_to_move: Color) -> Result<(), FenError> {
    let mut kings = [Square::new(0, 0); 2];

    for color in [Color::White, Color::Black] {
        let count = board.count(Piece::new(color, PieceKind::King));
        let square = board
            .find_king(color)
            .map_err(|_| FenError::KingCount { color, count })?;
        kings[color.index()] = square;
    }

    let [white, black] = kings;
    if (white.row - black.row).abs() <= 1 && (white.col - black.col).abs() <= 1 {
        return Err(FenError::AdjacentKings);
    }

    if !board.has_sufficient_material() {
        return Err(FenError::InsufficientMaterial);
    }

    let waiting = side_to_move.opposite();
    if is_square_attacked(board, kings[waiting.index()], side_to_move) {
        return Err(FenError::WaitingKingInCheck(waiting));
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let invalid = || FenError::Castling(castling_part.to_owned());
    if castling_part.is_empty() || castling_part.len() > 4 {
        return Err(invalid());
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => return Err(invalid()),
        };
        if *flag {
            return Err(invalid());
        }
        *flag = true;
    }

    Ok(rights)
}

/// Only ranks 3 and 6 can hold a target left by a two-square pawn advance.
fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let invalid = || FenError::EnPassant(en_passant_part.to_owned());
    if !en_passant_part.ends_with(['3', '6']) {
        return Err(invalid());
    }

    algebraic_to_square(en_passant_part).map(Some).ok_or_else(invalid)
}

fn parse_halfmove_clock(halfmove_part: &str) -> Result<u16, FenError> {
    parse_counter(halfmove_part)
        .and_then(|value| u16::try_from(value).ok())
        .filter(|value| *value <= MAX_HALFMOVE_CLOCK)
        .ok_or_else(|| FenError::HalfmoveClock(halfmove_part.to_owned()))
}

/// Non-negative decimal integer; rejects signs and other decorations that
/// `str::parse` would let through.
fn parse_counter(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>().ok()
}
