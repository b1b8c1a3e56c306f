//! Rejected move reasons.

use crate::position::Position;
use crate::types::Player;

/// Error that can occur when attempting a move.
///
/// A rejected move never changes the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0.coordinate())]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),

    /// The raw cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
