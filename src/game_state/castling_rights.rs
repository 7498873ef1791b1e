//! Castling rights bookkeeping.
//!
//! Six monotonic flags, three per color: once a king or rook is recorded as
//! having moved the flag stays set for the rest of the game. Only a full
//! game reset clears them. Keeping the flags in a small per-color struct
//! makes that invariant structurally obvious.

use crate::game_state::chess_types::PieceColor;

/// Which wing a castling move belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Moved-flags for one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideRights {
    pub king_moved: bool,
    pub kingside_rook_moved: bool,
    pub queenside_rook_moved: bool,
}

/// Castling rights for both colors. `Default` is the fresh-game state with
/// nothing moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingRights {
    white: SideRights,
    black: SideRights,
}

impl CastlingRights {
    pub fn new_game() -> Self {
        Self::default()
    }

    fn side(&self, color: PieceColor) -> &SideRights {
        match color {
            PieceColor::White => &self.white,
            PieceColor::Black => &self.black,
        }
    }

    fn side_mut(&mut self, color: PieceColor) -> &mut SideRights {
        match color {
            PieceColor::White => &mut self.white,
            PieceColor::Black => &mut self.black,
        }
    }

    /// Record that this color's king has moved, forfeiting both castles.
    pub fn mark_king_moved(&mut self, color: PieceColor) {
        self.side_mut(color).king_moved = true;
    }

    /// Record that the rook starting on this wing has moved.
    pub fn mark_rook_moved(&mut self, color: PieceColor, side: CastleSide) {
        let rights = self.side_mut(color);
        match side {
            CastleSide::Kingside => rights.kingside_rook_moved = true,
            CastleSide::Queenside => rights.queenside_rook_moved = true,
        }
    }

    /// Whether the rights for this castle are still intact. Board-dependent
    /// conditions (empty path, safe path, rook still standing) are checked
    /// by move generation, not here.
    pub fn may_castle(&self, color: PieceColor, side: CastleSide) -> bool {
        let rights = self.side(color);
        if rights.king_moved {
            return false;
        }
        match side {
            CastleSide::Kingside => !rights.kingside_rook_moved,
            CastleSide::Queenside => !rights.queenside_rook_moved,
        }
    }

    /// Full reset back to the fresh-game state. The only way a set flag is
    /// ever cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
