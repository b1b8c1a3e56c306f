//! Board snapshots recorded in the move history.

use crate::position::Position;
use crate::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One complete state of the board at a point in game history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board after the move.
    board: Board,
    /// Where the move that produced this snapshot was played.
    ///
    /// `None` only for the initial empty board.
    origin: Option<Position>,
}

impl Snapshot {
    /// The empty board every history starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            origin: None,
        }
    }

    /// A snapshot produced by a move at `origin`.
    pub fn new(board: Board, origin: Position) -> Self {
        Self {
            board,
            origin: Some(origin),
        }
    }

    /// Origin label such as `(1,1)`, if this snapshot came from a move.
    pub fn origin_label(&self) -> Option<String> {
        self.origin.map(Position::coordinate)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
