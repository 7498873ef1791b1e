//! Hot-seat terminal front end.
//!
//! Reads commands from stdin, applies them to a single `ChessGame` and
//! prints the board after every change. All rules live in the library;
//! this binary only translates text to engine calls and results to text.

use std::io::{self, BufRead, Write};

use parlor_chess::chess_errors::ChessErrors;
use parlor_chess::game_state::chess_types::{GameStatus, PieceColor};
use parlor_chess::game_state::game::ChessGame;
use parlor_chess::utils::algebraic::{algebraic_to_square, parse_coordinate_move, square_to_algebraic};
use parlor_chess::utils::pgn::write_pgn;
use parlor_chess::utils::render_board::{render_attack_overlay, render_board};

fn main() {
    let mut game = ChessGame::new();

    println!("parlor_chess hot-seat board");
    println!("commands: e2e4  moves <sq>  undo  redo  jump <n>  history  attacks  fen  load <fen>  pgn  reset  quit");
    print_position(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = line.trim();
        if input.is_empty() {
            prompt();
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match run_command(&mut game, input) {
            Ok(changed) => {
                if changed {
                    print_position(&game);
                }
            }
            Err(error) => println!("error: {}", describe_error(&error)),
        }
        prompt();
    }
}

/// Dispatches one command line. Returns whether the position changed and
/// should be reprinted.
fn run_command(game: &mut ChessGame, input: &str) -> Result<bool, ChessErrors> {
    let mut parts = input.split_ascii_whitespace();
    let command = parts.next().unwrap_or_default();
    let argument = parts.next();

    match command {
        "moves" => {
            let square_text =
                argument.ok_or_else(|| ChessErrors::InvalidAlgebraicString(input.to_string()))?;
            let square = algebraic_to_square(square_text)?;
            let targets = game.legal_moves(square)?;
            if targets.is_empty() {
                println!("no legal moves from {square_text}");
            } else {
                let listed: Vec<String> =
                    targets.iter().map(|&target| square_to_algebraic(target)).collect();
                println!("{square_text}: {}", listed.join(" "));
            }
            Ok(false)
        }
        "undo" => {
            if game.step_back()? {
                Ok(true)
            } else {
                println!("already at the initial position");
                Ok(false)
            }
        }
        "redo" => {
            if game.step_forward()? {
                Ok(true)
            } else {
                println!("already at the latest position");
                Ok(false)
            }
        }
        "jump" => {
            let index = argument
                .and_then(|text| text.parse::<usize>().ok())
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(input.to_string()))?;
            game.jump_to(index)?;
            Ok(true)
        }
        "history" => {
            let cursor = game.history().current_index();
            for (index, entry) in game.history().entries().iter().enumerate() {
                let marker = if Some(index) == cursor { ">" } else { " " };
                println!("{marker} {index}: {}", entry.label);
            }
            Ok(false)
        }
        "attacks" => {
            println!("{}", render_attack_overlay(game.board()));
            Ok(false)
        }
        "fen" => {
            println!("{}", game.get_fen());
            Ok(false)
        }
        "load" => {
            let fen = input
                .strip_prefix("load")
                .map(str::trim)
                .filter(|rest| !rest.is_empty())
                .ok_or_else(|| ChessErrors::InvalidFenString(input.to_string()))?;
            *game = ChessGame::from_fen(fen)?;
            Ok(true)
        }
        "pgn" => {
            print!("{}", write_pgn(game));
            Ok(false)
        }
        "reset" => {
            game.reset();
            Ok(true)
        }
        _ => {
            // Anything else is a coordinate move like e2e4.
            let (from, to) = parse_coordinate_move(command)?;
            let outcome = game.apply_move(from, to)?;
            if let Some(captured) = outcome.applied.captured {
                println!("captured {}", captured.symbol());
            }
            Ok(true)
        }
    }
}

fn print_position(game: &ChessGame) {
    println!("{}", render_board(game.board()));
    match game.status() {
        GameStatus::InProgress => println!("{} to move", color_name(game.turn())),
        GameStatus::Check(color) => {
            println!("{} to move, in check", color_name(color))
        }
        GameStatus::Checkmate { winner } => {
            println!("checkmate, {} wins", color_name(winner))
        }
        GameStatus::Stalemate => println!("stalemate, draw"),
    }
}

fn color_name(color: PieceColor) -> &'static str {
    match color {
        PieceColor::White => "White",
        PieceColor::Black => "Black",
    }
}

fn describe_error(error: &ChessErrors) -> String {
    match error {
        ChessErrors::InvalidMoveStart(square) => {
            format!("no piece of yours on {}", square_to_algebraic(*square))
        }
        ChessErrors::IllegalMove { from, to } => format!(
            "{} to {} is not legal",
            square_to_algebraic(*from),
            square_to_algebraic(*to)
        ),
        ChessErrors::GameAlreadyOver => "the game is over; use reset or jump".to_string(),
        ChessErrors::InvalidHistoryIndex { index, length } => {
            format!("history index {index} out of range (0..{length})")
        }
        other => format!("{other:?}"),
    }
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
