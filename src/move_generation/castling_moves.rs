//! Castling precondition gate.
//!
//! A castling destination is offered iff every condition holds: the king
//! has never moved, the wing's rook has never moved and still stands on
//! its corner, every square strictly between them is empty, and neither
//! the king's start square, the square it passes through, nor its
//! destination is attacked by the opponent. Failing any one condition
//! forbids the move entirely.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::castling_rights::{CastleSide, CastlingRights};
use crate::game_state::chess_types::{Piece, PieceColor, PieceKind};
use crate::move_generation::check_detection::square_attacked_by;

/// Castling destinations (king moves of two columns) available to `color`
/// with its king on `king_square`. Callers gate on "king not currently in
/// check" before asking. Path safety is evaluated against the opponent of
/// the castling color, never an ambient "current player".
pub fn castling_destinations(
    board: &Board,
    color: PieceColor,
    king_square: Square,
    rights: &CastlingRights,
) -> Result<Vec<Square>, ChessErrors> {
    let home = color.home_row();
    if king_square != (home, 4) {
        return Ok(Vec::new());
    }

    let mut destinations = Vec::new();
    if side_available(board, color, rights, CastleSide::Kingside) {
        destinations.push((home, 6));
    }
    if side_available(board, color, rights, CastleSide::Queenside) {
        destinations.push((home, 2));
    }
    Ok(destinations)
}

fn side_available(
    board: &Board,
    color: PieceColor,
    rights: &CastlingRights,
    side: CastleSide,
) -> bool {
    if !rights.may_castle(color, side) {
        return false;
    }

    let home = color.home_row();
    let (rook_corner, between, king_path): (Square, &[i8], [i8; 3]) = match side {
        CastleSide::Kingside => ((home, 7), &[5, 6], [4, 5, 6]),
        CastleSide::Queenside => ((home, 0), &[1, 2, 3], [4, 3, 2]),
    };

    // The rook must still be standing on its corner; the moved-flags alone
    // cannot see a rook that was captured where it stood.
    if board.piece_at(rook_corner) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }

    for &col in between {
        if board.piece_at((home, col)).is_some() {
            return false;
        }
    }

    let opponent = color.opposite();
    for col in king_path {
        if square_attacked_by(board, (home, col), opponent) {
            return false;
        }
    }

    true
}
