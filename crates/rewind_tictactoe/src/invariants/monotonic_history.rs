//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::rules::check_winner;
use crate::types::Square;
use crate::GameHistory;

/// Invariant: every snapshot after the first extends its predecessor by one
/// mark at its origin, and no snapshot follows a won board.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameHistory> for MonotonicHistoryInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(origin) = *after.origin() else {
                return false;
            };
            let Square::Occupied(player) = after.board().get(origin) else {
                return false;
            };
            before.board().is_empty(origin)
                && check_winner(before.board()).is_none()
                && before.board().with_mark(origin, player) == *after.board()
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an undecided board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::snapshot::Snapshot;
    use crate::types::Player;

    #[test]
    fn test_played_game_holds() {
        let mut game = GameHistory::new();
        for cell in [0, 3, 1, 4, 2] {
            game.attempt_move_at(cell).unwrap();
        }
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = GameHistory::new();
        game.attempt_move_at(0).unwrap();
        game.attempt_move_at(4).unwrap();

        // Sneak an extra O onto the last board.
        let last = game.history.pop().unwrap();
        let mut board = last.board().clone();
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        game.history.push(Snapshot::new(board, Position::Center));

        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = GameHistory::new();
        for cell in [0, 3, 1, 4, 2] {
            game.attempt_move_at(cell).unwrap();
        }
        let won = game.current_board().clone();
        game.history.push(Snapshot::new(
            won.with_mark(Position::BottomRight, Player::O),
            Position::BottomRight,
        ));
        game.current = game.history.len() - 1;

        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_tail_holds() {
        assert!(MonotonicHistoryInvariant::holds(&GameHistory::new()));
    }
}
