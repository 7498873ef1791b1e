//! Mailbox board representation: an 8×8 grid of optional pieces.
//!
//! `Board` is pure data with accessors; it never enforces chess rules.
//! Exactly one instance is canonical (owned by `ChessGame`); legality
//! filtering simulates candidate moves on cheap clones so the canonical
//! board is never observed mid-simulation.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_location::Square;
use crate::game_state::chess_types::{Piece, PieceColor, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position. Row 0 carries Black's back rank and
    /// row 7 White's, matching the `(row, col)` coordinate system.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for col in 0..8 {
            board.place((0, col), Piece::new(BACK_RANK[col as usize], PieceColor::Black));
            board.place((1, col), Piece::new(PieceKind::Pawn, PieceColor::Black));
            board.place((6, col), Piece::new(PieceKind::Pawn, PieceColor::White));
            board.place((7, col), Piece::new(BACK_RANK[col as usize], PieceColor::White));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize][square.1 as usize]
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.0 as usize][square.1 as usize] = Some(piece);
    }

    /// Empties a square, returning whatever stood there.
    #[inline]
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize][square.1 as usize].take()
    }

    /// Locates the unique king of `color`. A missing king means the board
    /// is corrupted; reachable states always contain both kings.
    pub fn find_king(&self, color: PieceColor) -> Result<Square, ChessErrors> {
        for (square, piece) in self.occupied() {
            if piece.kind == PieceKind::King && piece.color == color {
                return Ok(square);
            }
        }
        Err(ChessErrors::MissingKing(color))
    }

    /// All occupied squares with their pieces, scanned row-major.
    pub fn occupied(&self) -> Vec<(Square, Piece)> {
        let mut result = Vec::new();
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = self.piece_at((row, col)) {
                    result.push(((row, col), piece));
                }
            }
        }
        result
    }

    /// All squares occupied by `color`.
    pub fn pieces_of(&self, color: PieceColor) -> Vec<(Square, Piece)> {
        self.occupied()
            .into_iter()
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(
            board.piece_at((0, 4)),
            Some(Piece::new(PieceKind::King, PieceColor::Black))
        );
        assert_eq!(
            board.piece_at((7, 3)),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
        assert_eq!(
            board.piece_at((6, 0)),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
        assert_eq!(board.piece_at((4, 4)), None);
        assert_eq!(board.occupied().len(), 32);
        assert_eq!(board.pieces_of(PieceColor::Black).len(), 16);
    }

    #[test]
    fn find_king_on_fresh_and_corrupt_boards() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(PieceColor::White).unwrap(), (7, 4));
        assert_eq!(board.find_king(PieceColor::Black).unwrap(), (0, 4));

        let empty = Board::empty();
        assert!(matches!(
            empty.find_king(PieceColor::White),
            Err(ChessErrors::MissingKing(PieceColor::White))
        ));
    }

    #[test]
    fn clear_square_returns_the_occupant() {
        let mut board = Board::starting_position();
        let taken = board.clear_square((7, 0));
        assert_eq!(taken, Some(Piece::new(PieceKind::Rook, PieceColor::White)));
        assert_eq!(board.piece_at((7, 0)), None);
        assert_eq!(board.clear_square((7, 0)), None);
    }
}
