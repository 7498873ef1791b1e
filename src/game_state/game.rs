//! Game orchestration: turn order, castling bookkeeping, promotion,
//! terminal-state classification and the move history.
//!
//! `ChessGame` owns the only canonical `Board` and exposes the single
//! mutation entry point, `apply_move`. Everything below it (generation,
//! filtering, check detection) is a pure function of a board. A rejected
//! move returns an error before any state is touched.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::board_location::Square;
use crate::game_state::castling_rights::{CastleSide, CastlingRights};
use crate::game_state::chess_types::{AppliedMove, GameStatus, MoveKind, PieceColor, PieceKind};
use crate::history::move_history::{HistoryEntry, MoveHistory};
use crate::move_generation::check_detection::in_check;
use crate::move_generation::legal_moves::{
    apply_raw_move, castling_rook_hop, has_any_legal_move, legal_moves,
};
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Outcome of a successfully applied move.
#[derive(Debug, Clone, Copy)]
pub struct MoveOutcome {
    pub applied: AppliedMove,
    pub status: GameStatus,
}

/// Result of a square click routed through `select_square`.
#[derive(Debug, Clone)]
pub enum SelectionResult {
    /// A current-player piece was selected (or reselected); its legal
    /// destinations are cached for the follow-up click.
    Selected { square: Square, targets: Vec<Square> },
    /// The click landed on a cached destination and the move was applied.
    Moved(MoveOutcome),
    /// The click cleared the selection (or there was nothing to select).
    Cleared,
}

#[derive(Debug, Clone)]
struct Selection {
    square: Square,
    targets: Vec<Square>,
}

/// The engine facade: canonical board, rights, side to move, selection
/// cache, derived status and history.
#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    turn: PieceColor,
    castling: CastlingRights,
    status: GameStatus,
    selection: Option<Selection>,
    history: MoveHistory,
    fullmove_count: u16,
    /// Side to move and fullmove number of the seed entry; time travel
    /// re-derives both for any ply index from these.
    base_turn: PieceColor,
    base_fullmove: u16,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Fresh game from the standard starting position. The history is
    /// seeded with the initial-position entry so time travel can return
    /// to move zero.
    pub fn new() -> Self {
        let board = Board::starting_position();
        let castling = CastlingRights::new_game();
        let mut history = MoveHistory::new();
        history.record(HistoryEntry::initial(board.clone(), castling));

        ChessGame {
            board,
            turn: PieceColor::White,
            castling,
            status: GameStatus::InProgress,
            selection: None,
            history,
            fullmove_count: 1,
            base_turn: PieceColor::White,
            base_fullmove: 1,
        }
    }

    /// Load an arbitrary position. The status is derived immediately, so a
    /// mate-in-zero FEN loads as a finished game.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let parsed = parse_fen(fen)?;
        let status = classify_status(&parsed.board, parsed.turn, &parsed.castling)?;
        let mut history = MoveHistory::new();
        history.record(HistoryEntry::initial(parsed.board.clone(), parsed.castling));

        Ok(ChessGame {
            board: parsed.board,
            turn: parsed.turn,
            castling: parsed.castling,
            status,
            selection: None,
            history,
            fullmove_count: parsed.fullmove_count,
            base_turn: parsed.turn,
            base_fullmove: parsed.fullmove_count,
        })
    }

    pub fn get_fen(&self) -> String {
        generate_fen(&self.board, self.turn, &self.castling, self.fullmove_count)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn castling_rights(&self) -> &CastlingRights {
        &self.castling
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selection.as_ref().map(|selection| selection.square)
    }

    /// Legal destinations for the piece on `square` under the current
    /// rights; empty for empty squares.
    pub fn legal_moves(&self, square: Square) -> Result<Vec<Square>, ChessErrors> {
        legal_moves(&self.board, square, &self.castling)
    }

    /// Routes a square click. Selects a current-player piece, applies the
    /// move when the click lands on a cached destination, reselects when
    /// it lands on another current-player piece, and clears otherwise.
    pub fn select_square(&mut self, square: Square) -> Result<SelectionResult, ChessErrors> {
        if self.status.is_terminal() {
            self.selection = None;
            return Ok(SelectionResult::Cleared);
        }

        let clicked = self.board.piece_at(square);

        if let Some(selection) = self.selection.take() {
            if selection.targets.contains(&square) {
                let outcome = self.apply_move(selection.square, square)?;
                return Ok(SelectionResult::Moved(outcome));
            }
        }

        match clicked {
            Some(piece) if piece.color == self.turn => {
                let targets = self.legal_moves(square)?;
                self.selection = Some(Selection { square, targets: targets.clone() });
                Ok(SelectionResult::Selected { square, targets })
            }
            _ => {
                self.selection = None;
                Ok(SelectionResult::Cleared)
            }
        }
    }

    /// Applies a move for the side to move. Preconditions: the game is not
    /// over, `from` holds a current-player piece and `to` is in its legal
    /// set. Violations return an error with the game left untouched.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, ChessErrors> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameAlreadyOver);
        }
        let piece = match self.board.piece_at(from) {
            Some(piece) if piece.color == self.turn => piece,
            _ => return Err(ChessErrors::InvalidMoveStart(from)),
        };
        if !self.legal_moves(from)?.contains(&to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        // Validation is done; from here on every step succeeds.
        let mover = self.turn;
        let kind = if piece.kind == PieceKind::King && (to.1 - from.1).abs() == 2 {
            let (rook_from, rook_to) = castling_rook_hop(from, to);
            MoveKind::Castling { rook_from, rook_to }
        } else if piece.kind == PieceKind::Pawn && to.0 == mover.promotion_row() {
            MoveKind::Promotion
        } else {
            MoveKind::Regular
        };

        if piece.kind == PieceKind::King {
            self.castling.mark_king_moved(mover);
        }
        if piece.kind == PieceKind::Rook && from.0 == mover.home_row() {
            if from.1 == 0 {
                self.castling.mark_rook_moved(mover, CastleSide::Queenside);
            } else if from.1 == 7 {
                self.castling.mark_rook_moved(mover, CastleSide::Kingside);
            }
        }

        let captured = self.board.piece_at(to);
        apply_raw_move(&mut self.board, from, to);

        self.selection = None;
        self.turn = mover.opposite();
        if mover == PieceColor::Black {
            self.fullmove_count += 1;
        }
        self.status = classify_status(&self.board, self.turn, &self.castling)?;

        let applied = AppliedMove {
            piece,
            from,
            to,
            captured,
            kind,
        };
        self.history.record(HistoryEntry {
            mv: Some(applied),
            board: self.board.clone(),
            castling: self.castling,
            label: move_label(&applied),
        });

        Ok(MoveOutcome {
            applied,
            status: self.status,
        })
    }

    /// Jump the history cursor to `index` and rebuild the visible game
    /// from that snapshot.
    pub fn jump_to(&mut self, index: usize) -> Result<(), ChessErrors> {
        let (board, castling) = {
            let entry = self.history.jump(index)?;
            (entry.board.clone(), entry.castling)
        };
        self.restore(board, castling, index)
    }

    /// Step one entry back; `false` at the start of the history.
    pub fn step_back(&mut self) -> Result<bool, ChessErrors> {
        let restored = self
            .history
            .previous()
            .map(|entry| (entry.board.clone(), entry.castling));
        match restored {
            Some((board, castling)) => {
                let index = self.history.current_index().unwrap_or(0);
                self.restore(board, castling, index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Step one entry forward; `false` at the tail.
    pub fn step_forward(&mut self) -> Result<bool, ChessErrors> {
        let restored = self
            .history
            .next()
            .map(|entry| (entry.board.clone(), entry.castling));
        match restored {
            Some((board, castling)) => {
                let index = self.history.current_index().unwrap_or(0);
                self.restore(board, castling, index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Snapshots carry no side-to-move, so the player and status are
    /// re-derived from the ply index relative to the seed entry, which may
    /// be a loaded position with Black to move.
    fn restore(
        &mut self,
        board: Board,
        castling: CastlingRights,
        index: usize,
    ) -> Result<(), ChessErrors> {
        self.board = board;
        self.castling = castling;
        self.selection = None;
        self.turn = if index % 2 == 0 {
            self.base_turn
        } else {
            self.base_turn.opposite()
        };
        // The fullmove number advances after each of Black's plies.
        let black_plies = match self.base_turn {
            PieceColor::White => index / 2,
            PieceColor::Black => (index + 1) / 2,
        };
        self.fullmove_count = self.base_fullmove + black_plies as u16;
        self.status = classify_status(&self.board, self.turn, &self.castling)?;
        Ok(())
    }

    /// Full reset: fresh board, cleared rights, cleared history.
    pub fn reset(&mut self) {
        *self = ChessGame::new();
    }
}

/// Derives the status for the side to move: in check with no legal move is
/// checkmate, no check and no legal move is stalemate.
fn classify_status(
    board: &Board,
    to_move: PieceColor,
    castling: &CastlingRights,
) -> Result<GameStatus, ChessErrors> {
    let checked = in_check(board, to_move)?;
    let any_move = has_any_legal_move(board, to_move, castling)?;
    Ok(match (checked, any_move) {
        (true, false) => GameStatus::Checkmate {
            winner: to_move.opposite(),
        },
        (true, true) => GameStatus::Check(to_move),
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::InProgress,
    })
}

/// History label in the original display format: figurine plus from/to
/// coordinates, for example `♘ g1 → f3`.
fn move_label(applied: &AppliedMove) -> String {
    format!(
        "{} {} → {}",
        applied.piece.symbol(),
        square_to_algebraic(applied.from),
        square_to_algebraic(applied.to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn play(game: &mut ChessGame, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            let from = crate::utils::algebraic::algebraic_to_square(from).unwrap();
            let to = crate::utils::algebraic::algebraic_to_square(to).unwrap();
            game.apply_move(from, to).expect("scripted move should be legal");
        }
    }

    #[test]
    fn opening_moves_toggle_the_turn_and_grow_the_history() {
        let mut game = ChessGame::new();
        assert_eq!(game.turn(), PieceColor::White);
        play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.status(), GameStatus::InProgress);
        // Initial entry plus two plies.
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.history().entries()[1].label, "♙ e2 → e4");
    }

    #[test]
    fn illegal_destination_is_rejected_without_mutation() {
        let mut game = ChessGame::new();
        let before = game.get_fen();
        let result = game.apply_move((6, 4), (3, 4));
        assert!(matches!(result, Err(ChessErrors::IllegalMove { .. })));
        assert_eq!(game.get_fen(), before);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn moving_the_wrong_color_or_an_empty_square_is_rejected() {
        let mut game = ChessGame::new();
        assert!(matches!(
            game.apply_move((1, 4), (2, 4)),
            Err(ChessErrors::InvalidMoveStart((1, 4)))
        ));
        assert!(matches!(
            game.apply_move((4, 4), (3, 4)),
            Err(ChessErrors::InvalidMoveStart((4, 4)))
        ));
    }

    #[test]
    fn scholars_mate_is_classified_as_checkmate() {
        let mut game = ChessGame::new();
        play(
            &mut game,
            &[
                ("e2", "e4"),
                ("e7", "e5"),
                ("f1", "c4"),
                ("b8", "c6"),
                ("d1", "h5"),
                ("g8", "f6"),
            ],
        );
        let outcome = game
            .apply_move(
                crate::utils::algebraic::algebraic_to_square("h5").unwrap(),
                crate::utils::algebraic::algebraic_to_square("f7").unwrap(),
            )
            .unwrap();
        assert_eq!(
            outcome.status,
            GameStatus::Checkmate {
                winner: PieceColor::White
            }
        );
        assert_eq!(
            outcome.applied.captured,
            Some(Piece::new(PieceKind::Pawn, PieceColor::Black))
        );
        // Terminal: no further moves are accepted.
        assert!(matches!(
            game.apply_move((1, 0), (2, 0)),
            Err(ChessErrors::GameAlreadyOver)
        ));
    }

    #[test]
    fn back_rank_mate_loads_as_checkmate() {
        let game = ChessGame::from_fen("Q5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: PieceColor::White
            }
        );
        // Every black piece really has zero legal moves.
        for (square, _) in game.board().pieces_of(PieceColor::Black) {
            assert!(game.legal_moves(square).unwrap().is_empty());
        }
    }

    #[test]
    fn stalemate_is_a_draw_distinct_from_checkmate() {
        let game = ChessGame::from_fen("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn check_is_reported_but_not_terminal() {
        let mut game = ChessGame::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let outcome = game.apply_move((7, 0), (0, 0)).unwrap();
        assert_eq!(outcome.status, GameStatus::Check(PieceColor::Black));
        assert!(!game.status().is_terminal());
    }

    #[test]
    fn promotion_always_yields_a_queen() {
        let mut game = ChessGame::from_fen("7k/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let outcome = game.apply_move((1, 0), (0, 0)).unwrap();
        assert_eq!(outcome.applied.kind, MoveKind::Promotion);
        assert_eq!(
            game.board().piece_at((0, 0)),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
    }

    #[test]
    fn castling_moves_king_and_rook_and_spends_the_rights() {
        let mut game = ChessGame::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let outcome = game.apply_move((7, 4), (7, 6)).unwrap();
        assert!(matches!(outcome.applied.kind, MoveKind::Castling { .. }));
        assert_eq!(
            game.board().piece_at((7, 6)),
            Some(Piece::new(PieceKind::King, PieceColor::White))
        );
        assert_eq!(
            game.board().piece_at((7, 5)),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
        assert!(!game
            .castling_rights()
            .may_castle(PieceColor::White, CastleSide::Queenside));
    }

    #[test]
    fn rook_moves_forfeit_their_wing() {
        let mut game = ChessGame::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        game.apply_move((7, 0), (6, 0)).unwrap();
        assert!(!game
            .castling_rights()
            .may_castle(PieceColor::White, CastleSide::Queenside));
        assert!(game
            .castling_rights()
            .may_castle(PieceColor::White, CastleSide::Kingside));
    }

    #[test]
    fn selection_flow_selects_reselects_moves_and_clears() {
        let mut game = ChessGame::new();

        // Empty square with nothing selected: cleared.
        assert!(matches!(
            game.select_square((4, 4)).unwrap(),
            SelectionResult::Cleared
        ));

        // Select the e2 pawn.
        match game.select_square((6, 4)).unwrap() {
            SelectionResult::Selected { square, targets } => {
                assert_eq!(square, (6, 4));
                assert_eq!(targets.len(), 2);
            }
            other => panic!("expected a selection, got {other:?}"),
        }
        assert_eq!(game.selected_square(), Some((6, 4)));

        // Clicking another own piece reselects.
        assert!(matches!(
            game.select_square((7, 6)).unwrap(),
            SelectionResult::Selected { square: (7, 6), .. }
        ));

        // Clicking a cached destination applies the move.
        game.select_square((6, 4)).unwrap();
        match game.select_square((4, 4)).unwrap() {
            SelectionResult::Moved(outcome) => {
                assert_eq!(outcome.applied.to, (4, 4));
            }
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(game.selected_square(), None);
        assert_eq!(game.turn(), PieceColor::Black);

        // Clicking an enemy piece that is no legal target clears.
        assert!(matches!(
            game.select_square((4, 4)).unwrap(),
            SelectionResult::Cleared
        ));
    }

    #[test]
    fn time_travel_restores_snapshots_and_rederives_the_player() {
        let mut game = ChessGame::new();
        play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
        let tip_fen = game.get_fen();

        game.jump_to(1).unwrap();
        assert_eq!(game.turn(), PieceColor::Black);
        assert_eq!(game.board().piece_at((4, 4)).unwrap().kind, PieceKind::Pawn);
        assert_eq!(game.board().piece_at((3, 4)), None);

        // jump is idempotent.
        let once = game.get_fen();
        game.jump_to(1).unwrap();
        assert_eq!(game.get_fen(), once);

        // previous then next round-trips.
        game.step_back().unwrap();
        game.step_forward().unwrap();
        assert_eq!(game.get_fen(), once);

        // Back to the tip.
        game.jump_to(3).unwrap();
        assert_eq!(game.get_fen(), tip_fen);
        assert!(matches!(
            game.jump_to(9),
            Err(ChessErrors::InvalidHistoryIndex { index: 9, length: 4 })
        ));
    }

    #[test]
    fn time_travel_on_a_loaded_position_keeps_the_loaded_side_and_count() {
        // Seed position has Black to move at move 10; parity is relative to
        // the seed, not to the standard start.
        let fen = "4k3/8/8/8/8/8/8/4K3 b - - 0 10";
        let mut game = ChessGame::from_fen(fen).unwrap();
        play(&mut game, &[("e8", "e7")]);
        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.get_fen(), "8/4k3/8/8/8/8/8/4K3 w - - 0 11");

        game.jump_to(0).unwrap();
        assert_eq!(game.turn(), PieceColor::Black);
        assert_eq!(game.get_fen(), fen);

        game.step_forward().unwrap();
        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.get_fen(), "8/4k3/8/8/8/8/8/4K3 w - - 0 11");

        play(&mut game, &[("e1", "e2"), ("e7", "e6")]);
        game.step_back().unwrap();
        assert_eq!(game.turn(), PieceColor::Black);
        assert_eq!(game.get_fen(), "8/4k3/8/8/8/8/4K3/8 b - - 0 11");
    }

    #[test]
    fn moving_from_a_past_position_truncates_the_future() {
        let mut game = ChessGame::new();
        play(
            &mut game,
            &[
                ("e2", "e4"),
                ("e7", "e5"),
                ("g1", "f3"),
                ("b8", "c6"),
                ("f1", "c4"),
            ],
        );
        assert_eq!(game.history().len(), 6);

        game.jump_to(2).unwrap();
        assert_eq!(game.turn(), PieceColor::White);
        play(&mut game, &[("d2", "d4")]);

        assert_eq!(game.history().len(), 4);
        assert_eq!(game.history().current_index(), Some(3));
        assert!(game.clone().step_forward().map(|moved| !moved).unwrap());
        assert_eq!(game.history().entries()[3].label, "♙ d2 → d4");
    }

    #[test]
    fn reset_clears_board_rights_and_history() {
        let mut game = ChessGame::new();
        play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
        game.reset();
        assert_eq!(game.board(), &Board::starting_position());
        assert_eq!(game.turn(), PieceColor::White);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.castling_rights(), &CastlingRights::new_game());
    }

    #[test]
    fn kings_survive_any_scripted_sequence() {
        let mut game = ChessGame::new();
        play(
            &mut game,
            &[
                ("e2", "e4"),
                ("d7", "d5"),
                ("e4", "d5"),
                ("d8", "d5"),
                ("b1", "c3"),
                ("d5", "e5"),
            ],
        );
        assert!(game.board().find_king(PieceColor::White).is_ok());
        assert!(game.board().find_king(PieceColor::Black).is_ok());
    }
}
