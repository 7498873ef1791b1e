//! Navigable move history with hard branch truncation.
//!
//! An append-only log of applied moves, each paired with a snapshot of the
//! board (and castling rights) after the move plus a display label. The
//! log supports linear time travel: `previous`, `next` and `jump` return
//! the snapshot at the new position directly, and callers rebuild the
//! visible game from it rather than replaying moves. Recording while the
//! cursor is not at the tail discards every later entry first; that old
//! future is unrecoverable.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::AppliedMove;

/// One history position: the move that produced it (`None` for the seeded
/// initial position), the snapshot after the move, and a display label.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub mv: Option<AppliedMove>,
    pub board: Board,
    pub castling: CastlingRights,
    pub label: String,
}

impl HistoryEntry {
    pub fn initial(board: Board, castling: CastlingRights) -> Self {
        HistoryEntry {
            mv: None,
            board,
            castling,
            label: "Initial Position".to_string(),
        }
    }
}

/// The log itself. The cursor is `None` only when the history is empty
/// (the reset state); every successful record or navigation leaves it on a
/// valid entry.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    current: Option<usize>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.current.map(|index| &self.entries[index])
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Appends an entry and moves the cursor to it. If the cursor is not
    /// at the tail, every entry after it is discarded first.
    pub fn record(&mut self, entry: HistoryEntry) {
        let keep = match self.current {
            Some(index) => index + 1,
            None => 0,
        };
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.current = Some(self.entries.len() - 1);
    }

    /// Steps the cursor back one entry; a no-op returning `None` at the
    /// start of the history.
    pub fn previous(&mut self) -> Option<&HistoryEntry> {
        match self.current {
            Some(index) if index > 0 => {
                self.current = Some(index - 1);
                Some(&self.entries[index - 1])
            }
            _ => None,
        }
    }

    /// Steps the cursor forward one entry; a no-op returning `None` at the
    /// tail.
    pub fn next(&mut self) -> Option<&HistoryEntry> {
        match self.current {
            Some(index) if index + 1 < self.entries.len() => {
                self.current = Some(index + 1);
                Some(&self.entries[index + 1])
            }
            _ => None,
        }
    }

    /// Moves the cursor to `index`. Out-of-range indices are a caller
    /// contract violation.
    pub fn jump(&mut self, index: usize) -> Result<&HistoryEntry, ChessErrors> {
        if index >= self.entries.len() {
            return Err(ChessErrors::InvalidHistoryIndex {
                index,
                length: self.entries.len(),
            });
        }
        self.current = Some(index);
        Ok(&self.entries[index])
    }

    /// Drops everything and returns to the reset state.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str) -> HistoryEntry {
        HistoryEntry {
            mv: None,
            board: Board::empty(),
            castling: CastlingRights::new_game(),
            label: label.to_string(),
        }
    }

    fn history_of(labels: &[&str]) -> MoveHistory {
        let mut history = MoveHistory::new();
        for label in labels {
            history.record(entry(label));
        }
        history
    }

    #[test]
    fn recording_advances_the_cursor() {
        let history = history_of(&["a", "b", "c"]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), Some(2));
        assert_eq!(history.current_entry().unwrap().label, "c");
    }

    #[test]
    fn navigation_is_a_no_op_at_the_boundaries() {
        let mut history = history_of(&["a", "b"]);
        assert!(history.next().is_none());
        assert_eq!(history.previous().unwrap().label, "a");
        assert!(history.previous().is_none());
        assert_eq!(history.current_index(), Some(0));
        assert_eq!(history.next().unwrap().label, "b");
    }

    #[test]
    fn previous_then_next_returns_to_the_same_entry() {
        let mut history = history_of(&["a", "b", "c"]);
        let before = history.current_entry().unwrap().label.clone();
        history.previous();
        let after = history.next().unwrap().label.clone();
        assert_eq!(before, after);
        assert_eq!(history.current_index(), Some(2));
    }

    #[test]
    fn jump_is_idempotent_and_validates_its_index() {
        let mut history = history_of(&["a", "b", "c"]);
        let first = history.jump(1).unwrap().label.clone();
        let second = history.jump(1).unwrap().label.clone();
        assert_eq!(first, second);
        assert!(matches!(
            history.jump(3),
            Err(ChessErrors::InvalidHistoryIndex {
                index: 3,
                length: 3
            })
        ));
        // A failed jump leaves the cursor alone.
        assert_eq!(history.current_index(), Some(1));
    }

    #[test]
    fn recording_mid_history_truncates_the_old_future() {
        let mut history = history_of(&["a", "b", "c", "d", "e"]);
        history.jump(2).unwrap();
        history.record(entry("f"));
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_index(), Some(3));
        assert_eq!(history.current_entry().unwrap().label, "f");
        // The discarded entries are unreachable.
        assert!(history.next().is_none());
        let labels: Vec<&str> = history.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c", "f"]);
    }

    #[test]
    fn reset_returns_to_the_empty_state() {
        let mut history = history_of(&["a", "b"]);
        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.current_index(), None);
        assert!(history.previous().is_none());
        assert!(history.next().is_none());
    }
}
