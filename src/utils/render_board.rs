//! Terminal-oriented Unicode board renderer.
//!
//! Produces a human-readable view of a board for the hot-seat front end,
//! tests and diagnostics in text environments.

use crate::game_state::board::Board;
use crate::move_generation::attack_map::{AttackMap, AttackRole};

/// Render the board to a Unicode string for terminal output. Rank 8 (row
/// 0) is printed first so White sits at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");
    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8i8 {
            match board.piece_at((row, col)) {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");

    out
}

/// Render the attack overlay: `A` marks a piece attacking an enemy, `x` a
/// piece under attack, `*` one that is both, `·` anything else.
pub fn render_attack_overlay(board: &Board) -> String {
    let map = AttackMap::compute(board);
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");
    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8i8 {
            let mark = match map.role((row, col)) {
                Some(AttackRole::Both) => '*',
                Some(AttackRole::Attacking) => 'A',
                Some(AttackRole::Attacked) => 'x',
                None => '·',
            };
            out.push(mark);
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }
    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_renders_both_back_ranks() {
        let text = render_board(&Board::starting_position());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
    }
}
