//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::types::Player;
use crate::GameHistory;

/// Invariant: the mark added at history index `i` belongs to the player
/// whose turn it was at index `i - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(index, snapshot)| {
                (*snapshot.origin())
                    .and_then(|origin| snapshot.board().get(origin).player())
                    == Some(Player::for_move(index - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
