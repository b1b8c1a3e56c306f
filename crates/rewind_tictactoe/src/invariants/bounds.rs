//! Structural invariants: the history root and the displayed position.

use super::Invariant;
use crate::snapshot::Snapshot;
use crate::GameHistory;

/// Invariant: history is non-empty and starts with the empty board.
pub struct RootIsEmptyInvariant;

impl Invariant<GameHistory> for RootIsEmptyInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history().first() == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: the displayed position indexes a recorded snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.current_move() < game.len()
    }

    fn description() -> &'static str {
        "Displayed position is within the history"
    }
}
