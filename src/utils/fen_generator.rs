//! FEN generation, the inverse of `fen_parser`.
//!
//! The en-passant field is always `-` and the halfmove clock always `0`;
//! neither is tracked by this engine.

use crate::game_state::board::Board;
use crate::game_state::castling_rights::{CastleSide, CastlingRights};
use crate::game_state::chess_types::{Piece, PieceColor, PieceKind};

pub fn generate_fen(
    board: &Board,
    turn: PieceColor,
    castling: &CastlingRights,
    fullmove_count: u16,
) -> String {
    let mut result = String::new();

    for row in 0..8i8 {
        let mut empty_run: u8 = 0;
        for col in 0..8i8 {
            match board.piece_at((row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        result.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    result.push(fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            result.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            result.push('/');
        }
    }

    result.push(' ');
    result.push(match turn {
        PieceColor::White => 'w',
        PieceColor::Black => 'b',
    });
    result.push(' ');

    let mut any_castle = false;
    for (color, side, letter) in [
        (PieceColor::White, CastleSide::Kingside, 'K'),
        (PieceColor::White, CastleSide::Queenside, 'Q'),
        (PieceColor::Black, CastleSide::Kingside, 'k'),
        (PieceColor::Black, CastleSide::Queenside, 'q'),
    ] {
        if castling.may_castle(color, side) {
            result.push(letter);
            any_castle = true;
        }
    }
    if !any_castle {
        result.push('-');
    }

    result.push_str(" - 0 ");
    result.push_str(&fullmove_count.to_string());
    result
}

fn fen_char(piece: Piece) -> char {
    let c = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        PieceColor::White => c.to_ascii_uppercase(),
        PieceColor::Black => c,
    }
}
