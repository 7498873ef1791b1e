//! Pseudo-legal destination generation per piece kind.
//!
//! `pseudo_moves` produces destinations reachable per the movement rules,
//! ignoring (for non-king pieces) whether the move would leave the mover's
//! own king in check; that is the legality filter's job. King steps are the
//! exception and self-filter at generation time, because castling validity
//! depends on intermediate-square safety and not just the destination.
//!
//! `attack_squares` is the reachability-only variant used for check
//! detection and the attack overlay: a pawn "attacks" its forward diagonals
//! even when they are empty, so the king-adjacency test stays correct.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::{offset_square, Square};
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::move_generation::castling_moves::castling_destinations;
use crate::move_generation::check_detection::in_check;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pseudo-legal destinations for the piece on `from`. Empty squares yield
/// an empty list. Castling destinations are synthesized here (gated by the
/// precondition check) so the king's move set is complete.
pub fn pseudo_moves(
    board: &Board,
    from: Square,
    rights: &CastlingRights,
) -> Result<Vec<Square>, ChessErrors> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Ok(Vec::new()),
    };

    match piece.kind {
        PieceKind::Pawn => Ok(pawn_moves(board, from, piece)),
        PieceKind::Knight => Ok(step_moves(board, from, piece, &KNIGHT_OFFSETS)),
        PieceKind::Bishop => Ok(ray_moves(board, from, piece, &BISHOP_DIRECTIONS)),
        PieceKind::Rook => Ok(ray_moves(board, from, piece, &ROOK_DIRECTIONS)),
        PieceKind::Queen => {
            let mut moves = ray_moves(board, from, piece, &ROOK_DIRECTIONS);
            moves.extend(ray_moves(board, from, piece, &BISHOP_DIRECTIONS));
            Ok(moves)
        }
        PieceKind::King => king_moves(board, from, piece, rights),
    }
}

/// Squares the piece on `from` could capture on if an enemy stood there.
/// Ignores turn order and castling; pawn diagonals are included regardless
/// of occupancy.
pub fn attack_squares(board: &Board, from: Square) -> Vec<Square> {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => return Vec::new(),
    };

    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece),
        PieceKind::Knight => step_moves(board, from, piece, &KNIGHT_OFFSETS),
        PieceKind::Bishop => ray_moves(board, from, piece, &BISHOP_DIRECTIONS),
        PieceKind::Rook => ray_moves(board, from, piece, &ROOK_DIRECTIONS),
        PieceKind::Queen => {
            let mut moves = ray_moves(board, from, piece, &ROOK_DIRECTIONS);
            moves.extend(ray_moves(board, from, piece, &BISHOP_DIRECTIONS));
            moves
        }
        PieceKind::King => step_moves(board, from, piece, &KING_OFFSETS),
    }
}

/// Forward steps onto empty squares (never a capture), the double step from
/// the starting row when both squares are empty, and diagonal captures.
fn pawn_moves(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    let forward = piece.color.forward();

    if let Ok(one_step) = offset_square(from, forward, 0) {
        if board.piece_at(one_step).is_none() {
            moves.push(one_step);

            if from.0 == piece.color.pawn_row() {
                if let Ok(two_steps) = offset_square(from, 2 * forward, 0) {
                    if board.piece_at(two_steps).is_none() {
                        moves.push(two_steps);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Ok(target) = offset_square(from, forward, d_col) {
            if let Some(occupant) = board.piece_at(target) {
                if occupant.color != piece.color {
                    moves.push(target);
                }
            }
        }
    }

    moves
}

/// Pawn attack variant: both forward diagonals, occupied or not.
fn pawn_attacks(from: Square, piece: Piece) -> Vec<Square> {
    let mut attacks = Vec::new();
    for d_col in [-1, 1] {
        if let Ok(target) = offset_square(from, piece.color.forward(), d_col) {
            attacks.push(target);
        }
    }
    attacks
}

/// Fixed-offset movement (knight and plain king steps): destination must
/// be on the board and empty or enemy-occupied.
fn step_moves(board: &Board, from: Square, piece: Piece, offsets: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in offsets {
        if let Ok(target) = offset_square(from, d_row, d_col) {
            match board.piece_at(target) {
                None => moves.push(target),
                Some(occupant) if occupant.color != piece.color => moves.push(target),
                Some(_) => {}
            }
        }
    }
    moves
}

/// Ray casting for sliders: walk each direction until the board edge, an
/// own piece (excluded) or an enemy piece (included as a capture).
fn ray_moves(board: &Board, from: Square, piece: Piece, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Ok(target) = offset_square(cursor, d_row, d_col) {
            match board.piece_at(target) {
                None => {
                    moves.push(target);
                    cursor = target;
                }
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
    moves
}

/// King steps self-filter destinations that would land in check, then the
/// castling destinations are appended when the king is not in check. The
/// legality filter still re-simulates every candidate afterwards.
fn king_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    rights: &CastlingRights,
) -> Result<Vec<Square>, ChessErrors> {
    let mut moves = Vec::new();

    for target in step_moves(board, from, piece, &KING_OFFSETS) {
        let mut scratch = board.clone();
        scratch.clear_square(from);
        scratch.clear_square(target);
        scratch.place(target, piece);
        if !in_check(&scratch, piece.color)? {
            moves.push(target);
        }
    }

    if !in_check(board, piece.color)? {
        moves.extend(castling_destinations(board, piece.color, from, rights)?);
    }

    Ok(moves)
}
