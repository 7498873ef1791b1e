//! Legality filtering via hypothetical-move simulation.
//!
//! Each pseudo-legal destination is applied to a scratch copy of the board
//! and kept iff the mover's king is not in check afterwards. Simulating on
//! a copied `Board` value instead of mutate-and-revert means a candidate
//! evaluation can never leave the canonical board half-reverted.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::{Piece, PieceColor, PieceKind};
use crate::move_generation::check_detection::in_check;
use crate::move_generation::pseudo_moves::pseudo_moves;

/// Destinations for the piece on `from` that do not leave its own king in
/// check. Empty squares yield an empty list. King candidates are filtered
/// again here even though king step generation already self-filters:
/// castling candidates have passed the rights and path checks but the
/// resulting position must still leave the king safe.
pub fn legal_moves(
    board: &Board,
    from: Square,
    rights: &CastlingRights,
) -> Result<Vec<Square>, ChessErrors> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Ok(Vec::new()),
    };

    let candidates = pseudo_moves(board, from, rights)?;
    let mut legal = Vec::with_capacity(candidates.len());
    for to in candidates {
        let mut scratch = board.clone();
        apply_raw_move(&mut scratch, from, to);
        if !in_check(&scratch, piece.color)? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Whether `color` has at least one legal move anywhere. Short-circuits on
/// the first piece with a move; used for checkmate/stalemate detection.
pub fn has_any_legal_move(
    board: &Board,
    color: PieceColor,
    rights: &CastlingRights,
) -> Result<bool, ChessErrors> {
    for (square, _) in board.pieces_of(color) {
        if !legal_moves(board, square, rights)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Moves the piece on `from` to `to` with no validation: captures whatever
/// stood on `to`, hops the paired rook when a king travels two columns,
/// and promotes a pawn reaching its final row to a queen. Shared by the
/// simulation above and the real `apply_move`, so simulated positions match
/// applied positions exactly.
pub(crate) fn apply_raw_move(board: &mut Board, from: Square, to: Square) {
    let piece = match board.clear_square(from) {
        Some(piece) => piece,
        None => return,
    };

    if piece.kind == PieceKind::King && (to.1 - from.1).abs() == 2 {
        let (rook_from, rook_to) = castling_rook_hop(from, to);
        if let Some(rook) = board.clear_square(rook_from) {
            board.place(rook_to, rook);
        }
    }

    board.clear_square(to);
    if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row() {
        board.place(to, Piece::new(PieceKind::Queen, piece.color));
    } else {
        board.place(to, piece);
    }
}

/// Rook relocation paired with a two-column king move: the rook lands on
/// the square the king crossed.
pub(crate) fn castling_rook_hop(from: Square, to: Square) -> (Square, Square) {
    let row = from.0;
    if to.1 > from.1 {
        ((row, 7), (row, 5))
    } else {
        ((row, 0), (row, 3))
    }
}
