//! Tic-tac-toe with a time-travel move history.
//!
//! This crate is the pure core of the game: no I/O, no rendering.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] and named [`Position`]s
//! - **Rules**: [`rules::check_winner`] finds the first completed line;
//!   [`rules::is_full`] detects a full board
//! - **History**: [`GameHistory`] owns the recorded [`Snapshot`]s and the
//!   displayed position, and derives turn, status and the move list on demand
//! - **View**: [`GameView`] bundles what a rendering surface paints
//! - **Invariants**: properties of the history checked after every mutation
//!   in debug builds
//!
//! # Example
//!
//! ```rust
//! use rewind_tictactoe::{GameHistory, GameStatus, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.attempt_move_at(cell).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.winner().map(|line| line.indices()), Some([0, 4, 8]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;
mod view;

pub use action::MoveError;
pub use history::GameHistory;
pub use position::Position;
pub use rules::WinningLine;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
pub use view::{GameStatus, GameView, MoveEntry};
