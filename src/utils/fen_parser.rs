//! FEN parsing for position interchange.
//!
//! Accepts the standard six-field form. The en-passant field is ignored
//! (the engine does not implement en passant) and the halfmove clock is
//! validated but not kept; placement, side to move, castling availability
//! and the fullmove number survive the round trip.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::castling_rights::{CastleSide, CastlingRights};
use crate::game_state::chess_types::{Piece, PieceColor, PieceKind};

/// Everything a FEN string describes that this engine tracks.
#[derive(Debug, Clone)]
pub struct FenPosition {
    pub board: Board,
    pub turn: PieceColor,
    pub castling: CastlingRights,
    pub fullmove_count: u16,
}

pub fn parse_fen(text: &str) -> Result<FenPosition, ChessErrors> {
    let mut fields = text.split_ascii_whitespace();

    let placement = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString(text.to_string()))?;
    let board = parse_placement(placement)?;

    let turn = match fields.next() {
        Some("w") => PieceColor::White,
        Some("b") => PieceColor::Black,
        _ => return Err(ChessErrors::InvalidFenString(text.to_string())),
    };

    let castle_field = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString(text.to_string()))?;
    let castling = parse_castle_field(castle_field)?;

    // En passant target: accepted and discarded.
    fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString(text.to_string()))?;

    let halfmove = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString(text.to_string()))?;
    halfmove
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenString(text.to_string()))?;

    let fullmove_count = fields
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString(text.to_string()))?
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFenString(text.to_string()))?;

    Ok(FenPosition {
        board,
        turn,
        castling,
        fullmove_count,
    })
}

fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let mut board = Board::empty();
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidFenString(placement.to_string()));
    }

    // FEN lists rank 8 first, which is row 0 in our coordinates.
    for (row, row_text) in rows.iter().enumerate() {
        let mut col: i8 = 0;
        for c in row_text.chars() {
            if let Some(digit) = c.to_digit(10) {
                col += digit as i8;
                continue;
            }
            if col > 7 {
                return Err(ChessErrors::InvalidFenString(placement.to_string()));
            }
            board.place((row as i8, col), piece_from_fen_char(c)?);
            col += 1;
        }
        if col != 8 {
            return Err(ChessErrors::InvalidFenString(placement.to_string()));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(c: char) -> Result<Piece, ChessErrors> {
    let color = if c.is_ascii_uppercase() {
        PieceColor::White
    } else {
        PieceColor::Black
    };
    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessErrors::InvalidFenString(c.to_string())),
    };
    Ok(Piece::new(kind, color))
}

/// Maps FEN castling availability onto the moved-flag model: a missing
/// letter marks that wing's rook as moved, and a color with neither letter
/// marks its king as moved.
fn parse_castle_field(field: &str) -> Result<CastlingRights, ChessErrors> {
    let mut white_kingside = false;
    let mut white_queenside = false;
    let mut black_kingside = false;
    let mut black_queenside = false;

    for c in field.chars() {
        match c {
            'K' => white_kingside = true,
            'Q' => white_queenside = true,
            'k' => black_kingside = true,
            'q' => black_queenside = true,
            '-' => {}
            _ => return Err(ChessErrors::InvalidFenString(field.to_string())),
        }
    }

    let mut castling = CastlingRights::new_game();
    if !white_kingside {
        castling.mark_rook_moved(PieceColor::White, CastleSide::Kingside);
    }
    if !white_queenside {
        castling.mark_rook_moved(PieceColor::White, CastleSide::Queenside);
    }
    if !white_kingside && !white_queenside {
        castling.mark_king_moved(PieceColor::White);
    }
    if !black_kingside {
        castling.mark_rook_moved(PieceColor::Black, CastleSide::Kingside);
    }
    if !black_queenside {
        castling.mark_rook_moved(PieceColor::Black, CastleSide::Queenside);
    }
    if !black_kingside && !black_queenside {
        castling.mark_king_moved(PieceColor::Black);
    }
    Ok(castling)
}
