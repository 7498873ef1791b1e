//! Errors used throughout the rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities and history navigation. The enum `ChessErrors` is used
//! as the single error type across the crate to simplify propagation and
//! matching. Each variant carries contextual information where appropriate
//! to aid diagnostics and user-facing error messages.

use crate::game_state::board_location::Square;
use crate::game_state::chess_types::PieceColor;

/// Unified error type for the rules engine.
///
/// Parsing variants (`InvalidAlgebraicChar`, `InvalidFenString`, ...) are
/// recoverable and suitable for presenting to end users. Move and history
/// variants are caller-contract violations raised at the API boundary; the
/// engine guarantees no partial mutation occurred when one is returned.
/// `MissingKing` indicates a corrupted board and is not recoverable.
#[derive(Debug)]
pub enum ChessErrors {
    /// Square arithmetic would leave the board.
    ///
    /// Payload: (origin_square, d_row, d_col)
    OutOfBounds((Square, i8, i8)),

    /// A single character used during algebraic parsing was invalid.
    InvalidAlgebraicChar(char),

    /// An algebraic string could not be interpreted as a square or move.
    InvalidAlgebraicString(String),

    /// A FEN string failed to parse; payload is the offending input.
    InvalidFenString(String),

    /// The start square of an attempted move is empty or holds a piece
    /// that does not belong to the side to move.
    InvalidMoveStart(Square),

    /// The destination of an attempted move is not in the legal set for
    /// the piece on the start square.
    IllegalMove { from: Square, to: Square },

    /// A move was attempted after checkmate or stalemate.
    GameAlreadyOver,

    /// A history jump targeted an index outside `0..length`.
    InvalidHistoryIndex { index: usize, length: usize },

    /// The board does not contain a king for one side. This represents a
    /// corrupted game state; callers should treat it as a fatal logic error.
    MissingKing(PieceColor),
}
