//! PGN transcript export.
//!
//! Writes the recorded history as a PGN document with coordinate movetext,
//! for saving finished or in-progress hot-seat games.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_types::{AppliedMove, GameStatus, MoveKind, PieceColor};
use crate::game_state::game::ChessGame;
use crate::utils::algebraic::square_to_algebraic;

/// Write the game's history as PGN with default headers. The Date header
/// is today's local date.
pub fn write_pgn(game: &ChessGame) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert(
        "Result".to_owned(),
        result_token(game.status()).to_owned(),
    );

    write_pgn_with_headers(game, &headers)
}

pub fn write_pgn_with_headers(game: &ChessGame, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    // Entry 0 is the initial-position seed and carries no move.
    let mut movetext_parts = Vec::<String>::new();
    let plies = game
        .history()
        .entries()
        .iter()
        .filter_map(|entry| entry.mv.as_ref());
    for (ply, applied) in plies.enumerate() {
        let token = movetext_token(applied);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, token));
        } else {
            movetext_parts.push(token);
        }
    }

    let result = headers
        .get("Result")
        .map(String::as_str)
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Coordinate token for one applied move, with a `q` suffix for promotion.
fn movetext_token(applied: &AppliedMove) -> String {
    let mut token = format!(
        "{}{}",
        square_to_algebraic(applied.from),
        square_to_algebraic(applied.to)
    );
    if applied.kind == MoveKind::Promotion {
        token.push('q');
    }
    token
}

fn result_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Checkmate {
            winner: PieceColor::White,
        } => "1-0",
        GameStatus::Checkmate {
            winner: PieceColor::Black,
        } => "0-1",
        GameStatus::Stalemate => "1/2-1/2",
        GameStatus::InProgress | GameStatus::Check(_) => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
