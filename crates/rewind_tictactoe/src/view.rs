//! Read-only view model handed to rendering surfaces.

use crate::position::Position;
use crate::rules::WinningLine;
use crate::types::{Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player holds a full line.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Every square is taken and nobody won.
    #[display("Draw!")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Whether the displayed board is finished.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// One row of the jump-to-move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry refers to.
    index: usize,
    /// Where the move was played; `None` for the game start.
    origin: Option<Position>,
    /// Whether this is the displayed snapshot.
    is_current: bool,
}

impl MoveEntry {
    /// Creates an entry for history index `index`.
    pub fn new(index: usize, origin: Option<Position>, is_current: bool) -> Self {
        Self {
            index,
            origin,
            is_current,
        }
    }

    /// Whether selecting this entry should jump anywhere.
    pub fn is_actionable(&self) -> bool {
        !self.is_current
    }

    /// Text for the entry, e.g. `Go to move #3 (2,1)`.
    ///
    /// The displayed entry reads `You are at ...` instead.
    pub fn label(&self) -> String {
        let target = match self.origin {
            Some(pos) if self.index > 0 => format!("move #{} {}", self.index, pos.coordinate()),
            _ => "game start".to_string(),
        };
        if self.is_current {
            format!("You are at {target}")
        } else {
            format!("Go to {target}")
        }
    }
}

/// Everything needed to paint one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Displayed board squares in row-major order.
    squares: [Square; 9],
    /// Status of the displayed board.
    status: GameStatus,
    /// Cells to highlight when the displayed board is won.
    winning_line: Option<WinningLine>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// History index of the displayed snapshot.
    current_move: usize,
    /// Whether `moves` is oldest first.
    ascending: bool,
}

impl GameView {
    /// Assembles a view.
    pub fn new(
        squares: [Square; 9],
        status: GameStatus,
        winning_line: Option<WinningLine>,
        moves: Vec<MoveEntry>,
        current_move: usize,
        ascending: bool,
    ) -> Self {
        Self {
            squares,
            status,
            winning_line,
            moves,
            current_move,
            ascending,
        }
    }

    /// Text for the sort toggle: names the order it switches to.
    pub fn sort_label(&self) -> &'static str {
        if self.ascending {
            "Sort Descending"
        } else {
            "Sort Ascending"
        }
    }

    /// Whether the square at `pos` is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Square at `pos` on the displayed board.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }
}
