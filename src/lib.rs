//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! move history, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_location;
    pub mod castling_rights;
    pub mod chess_types;
    pub mod game;
}

pub mod move_generation {
    pub mod attack_map;
    pub mod castling_moves;
    pub mod check_detection;
    pub mod legal_moves;
    pub mod pseudo_moves;
}

pub mod history {
    pub mod move_history;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_board;
}
