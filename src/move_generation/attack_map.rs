//! Whole-board attack overlay derivation.
//!
//! Consumed by presentation layers that highlight which pieces currently
//! attack an enemy piece and which are themselves under attack. Pure
//! derivation over the board; no game state is touched.

use std::collections::BTreeSet;

use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::move_generation::pseudo_moves::attack_squares;

/// Overlay role of an occupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRole {
    Attacking,
    Attacked,
    Both,
}

/// Squares whose piece attacks at least one enemy piece, and squares whose
/// piece is attacked by at least one enemy piece.
#[derive(Debug, Clone, Default)]
pub struct AttackMap {
    attacking: BTreeSet<Square>,
    attacked: BTreeSet<Square>,
}

impl AttackMap {
    /// Unions `attack_squares` over every piece on the board and keeps the
    /// hits that land on enemy-occupied squares.
    pub fn compute(board: &Board) -> Self {
        let mut map = AttackMap::default();
        for (square, piece) in board.occupied() {
            for target in attack_squares(board, square) {
                if let Some(victim) = board.piece_at(target) {
                    if victim.color != piece.color {
                        map.attacking.insert(square);
                        map.attacked.insert(target);
                    }
                }
            }
        }
        map
    }

    pub fn is_attacking(&self, square: Square) -> bool {
        self.attacking.contains(&square)
    }

    pub fn is_attacked(&self, square: Square) -> bool {
        self.attacked.contains(&square)
    }

    /// Role of a square in the overlay, or `None` when it is uninvolved.
    pub fn role(&self, square: Square) -> Option<AttackRole> {
        match (self.is_attacking(square), self.is_attacked(square)) {
            (true, true) => Some(AttackRole::Both),
            (true, false) => Some(AttackRole::Attacking),
            (false, true) => Some(AttackRole::Attacked),
            (false, false) => None,
        }
    }
}
