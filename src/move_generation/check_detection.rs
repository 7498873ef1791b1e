//! Check detection built on the attack-set variant of move generation.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::PieceColor;
use crate::move_generation::pseudo_moves::attack_squares;

/// Whether any piece of `attacker` reaches `target`. Unioning per-piece
/// attack sets keeps the pawn-diagonal and slider-blocking rules in one
/// place.
pub fn square_attacked_by(board: &Board, target: Square, attacker: PieceColor) -> bool {
    for (square, _) in board.pieces_of(attacker) {
        if attack_squares(board, square).contains(&target) {
            return true;
        }
    }
    false
}

/// Whether `color`'s king is attacked by any enemy piece. A board without
/// that king is corrupted and reported as an error rather than guessed at.
pub fn in_check(board: &Board, color: PieceColor) -> Result<bool, ChessErrors> {
    let king_square = board.find_king(color)?;
    Ok(square_attacked_by(board, king_square, color.opposite()))
}
