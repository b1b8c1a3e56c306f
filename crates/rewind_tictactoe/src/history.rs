//! Time-travel move history for a single game.
//!
//! [`GameHistory`] owns every board snapshot produced during a game and a
//! pointer to the one currently displayed. Whose turn it is, the winner and
//! the status line are all derived from that pointer on demand, so they can
//! never drift from the snapshot they describe.

use crate::action::MoveError;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::snapshot::Snapshot;
use crate::types::{Board, Player};
use crate::view::{GameStatus, GameView, MoveEntry};
use tracing::{debug, info, instrument};

/// Ordered board snapshots, the displayed position, and the list sort order.
///
/// # Example
///
/// ```rust
/// use rewind_tictactoe::{GameHistory, Player, Position};
///
/// let mut game = GameHistory::new();
/// assert_eq!(game.attempt_move(Position::TopLeft), Ok(Player::X));
/// assert_eq!(game.status().to_string(), "Next player: O");
///
/// game.jump_to(0);
/// game.attempt_move(Position::MiddleRight).unwrap();
/// assert_eq!(game.len(), 2);
/// assert_eq!(game.history()[1].origin_label().as_deref(), Some("(2,3)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current: usize,
    ascending: bool,
}

impl GameHistory {
    /// Creates a history holding only the empty board, sorted ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(true)
    }

    /// Creates a fresh history with the given initial sort order.
    #[instrument]
    pub fn with_sort_order(ascending: bool) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current: 0,
            ascending,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────

    /// Plays the next mark at `pos` on the displayed board.
    ///
    /// Any snapshots after the displayed one are discarded before the new
    /// snapshot is appended, and the displayed position advances to it.
    /// Returns the player whose mark was placed.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the displayed board already has a winner.
    /// - `MoveError::SquareOccupied` if `pos` is taken.
    ///
    /// On error nothing changes.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn attempt_move(&mut self, pos: Position) -> Result<Player, MoveError> {
        let board = self.current_board();
        if let Some(line) = rules::check_winner(board) {
            debug!(winner = %line.player, "Move rejected, game already won");
            return Err(MoveError::GameOver(line.player));
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Move rejected, square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let next = Snapshot::new(board.with_mark(pos, player), pos);

        let discarded = self.history.len() - (self.current + 1);
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        info!(
            player = %player,
            origin = %pos.coordinate(),
            discarded,
            move_number = self.current,
            "Move played"
        );
        self.debug_check();
        Ok(player)
    }

    /// Plays at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` for indices past 8, otherwise as
    /// [`attempt_move`](Self::attempt_move).
    #[instrument(skip(self))]
    pub fn attempt_move_at(&mut self, index: usize) -> Result<Player, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.attempt_move(pos)
    }

    /// Displays the snapshot at `index` without altering the history.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a recorded history index. Callers are
    /// expected to offer only the entries returned by
    /// [`move_entries`](Self::move_entries).
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.history.len(),
            "jump_to({index}) out of range: history has {} snapshots",
            self.history.len()
        );
        debug!(from = self.current, to = index, "Jumping through history");
        self.current = index;
        self.debug_check();
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Sort order toggled");
    }

    // ─────────────────────────────────────────────────────────
    //  Stored state
    // ─────────────────────────────────────────────────────────

    /// Every recorded snapshot, oldest first. Never empty.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of recorded snapshots, including the initial board.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the initial board is never discarded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The displayed snapshot.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    // ─────────────────────────────────────────────────────────
    //  Derived state
    // ─────────────────────────────────────────────────────────

    /// The player who moves next from the displayed position.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current)
    }

    /// The winning line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        rules::check_winner(self.current_board())
    }

    /// Status of the displayed board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        match rules::check_winner(board) {
            Some(line) => GameStatus::Won(line.player),
            None if rules::is_full(board) => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }

    /// One entry per history index, in display order.
    ///
    /// Reversing the order never renumbers entries: each entry keeps the
    /// history index it jumps to.
    #[instrument(skip(self))]
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(index, snapshot)| {
                MoveEntry::new(index, *snapshot.origin(), index == self.current)
            })
            .collect();
        if !self.ascending {
            entries.reverse();
        }
        entries
    }

    /// Everything a rendering surface needs to paint the game.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.current_board().squares(),
            self.status(),
            self.winner(),
            self.move_entries(),
            self.current,
            self.ascending,
        )
    }

    fn debug_check(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn play(game: &mut GameHistory, cells: &[usize]) {
        for &cell in cells {
            game.attempt_move_at(cell).expect("legal move");
        }
    }

    #[test]
    fn test_new_history_holds_empty_board() {
        let game = GameHistory::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.is_ascending());
        assert_eq!(game.current_snapshot(), &Snapshot::initial());
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_first_move_places_x_at_origin() {
        let mut game = GameHistory::new();
        assert_eq!(game.attempt_move_at(0), Ok(Player::X));

        let snapshot = game.current_snapshot();
        assert_eq!(snapshot.board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(snapshot.board().occupied(), 1);
        assert_eq!(snapshot.origin_label().as_deref(), Some("(1,1)"));
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::O));
    }

    #[test]
    fn test_occupied_square_rejected_without_change() {
        let mut game = GameHistory::new();
        play(&mut game, &[4]);
        let before = game.clone();

        assert_eq!(
            game.attempt_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut game = GameHistory::new();
        play(&mut game, &[0, 1, 4, 2, 8]);
        let before = game.clone();

        assert_eq!(game.attempt_move_at(5), Err(MoveError::GameOver(Player::X)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_index_rejected() {
        let mut game = GameHistory::new();
        assert_eq!(game.attempt_move_at(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.len(), 1);
    }

    #[test]
    fn test_move_after_rewind_truncates_future() {
        let mut game = GameHistory::new();
        play(&mut game, &[0, 1, 2, 3]);
        game.jump_to(1);

        assert_eq!(game.attempt_move_at(8), Ok(Player::O));
        assert_eq!(game.len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(*game.current_snapshot().origin(), Some(Position::BottomRight));
        assert!(game.current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_jump_restores_turn_and_board() {
        let mut game = GameHistory::new();
        play(&mut game, &[0, 4, 8]);
        game.jump_to(2);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.current_board().occupied(), 2);
        assert_eq!(game.len(), 4);
    }

    #[test]
    fn test_rewinding_past_a_win_allows_moves_again() {
        let mut game = GameHistory::new();
        play(&mut game, &[0, 1, 4, 2, 8]);
        game.jump_to(4);
        assert_eq!(game.winner(), None);
        assert_eq!(game.attempt_move_at(6), Ok(Player::X));
        assert_eq!(game.len(), 6);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_past_end_panics() {
        let mut game = GameHistory::new();
        game.jump_to(1);
    }

    #[test]
    fn test_toggle_only_reverses_entries() {
        let mut game = GameHistory::new();
        play(&mut game, &[0, 4]);
        let ascending = game.move_entries();

        game.toggle_sort_order();
        assert!(!game.is_ascending());
        let descending = game.move_entries();

        assert_eq!(descending.iter().rev().cloned().collect::<Vec<_>>(), ascending);
        assert_eq!(game.len(), 3);
        assert_eq!(game.current_move(), 2);
    }
}
