//! Conversions between `(row, col)` squares and algebraic coordinates.
//!
//! Row 0 is rank 8, so the rank digit counts down as the row index grows.
//! Reused by FEN handling, move entry and history labels.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_location::Square;

/// Convert an algebraic coordinate (for example "e4") to a square.
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_string()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok(((b'8' - rank) as i8, (file - b'a') as i8))
}

/// Convert an on-board square to its algebraic coordinate. Squares from
/// move generation are always in range.
pub fn square_to_algebraic(square: Square) -> String {
    let file = char::from(b'a' + square.1 as u8);
    let rank = char::from(b'8' - square.0 as u8);
    format!("{file}{rank}")
}

/// Parse a coordinate move like "e2e4" into its from/to squares.
pub fn parse_coordinate_move(text: &str) -> Result<(Square, Square), ChessErrors> {
    let trimmed = text.trim();
    if trimmed.len() != 4 {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_string()));
    }
    let from = algebraic_to_square(&trimmed[..2])?;
    let to = algebraic_to_square(&trimmed[2..])?;
    Ok((from, to))
}
