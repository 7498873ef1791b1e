//! Core value types shared by the board, move generation and history.

use crate::game_state::board_location::Square;

/// Side to move or piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    /// Row holding this color's pawns at the start of the game.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Farthest row for this color's pawns; reaching it promotes.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }

    /// Row delta of a single pawn step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }
}

/// Piece kind; color is represented separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece as an immutable value. A move replaces the piece reference on a
/// square; promotion creates a new piece rather than mutating the pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Piece { kind, color }
    }

    /// Unicode figurine used by board rendering and history labels.
    pub const fn symbol(self) -> char {
        match self.color {
            PieceColor::White => match self.kind {
                PieceKind::King => '♔',
                PieceKind::Queen => '♕',
                PieceKind::Rook => '♖',
                PieceKind::Bishop => '♗',
                PieceKind::Knight => '♘',
                PieceKind::Pawn => '♙',
            },
            PieceColor::Black => match self.kind {
                PieceKind::King => '♚',
                PieceKind::Queen => '♛',
                PieceKind::Rook => '♜',
                PieceKind::Bishop => '♝',
                PieceKind::Knight => '♞',
                PieceKind::Pawn => '♟',
            },
        }
    }
}

/// Classification attached to a move once it has been applied. Special
/// move kinds are derived from board state at apply time, not tagged at
/// generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Regular,
    /// King moved two columns; the paired rook hop is recorded here.
    Castling { rook_from: Square, rook_to: Square },
    /// Pawn reached its promotion row and became a queen.
    Promotion,
}

/// Full record of an applied move, as stored in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

/// Game status derived after every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The named color is in check and must resolve it.
    Check(PieceColor),
    Checkmate { winner: PieceColor },
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate are terminal; `apply_move` rejects further
    /// moves once either is reached.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}
