//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to tic-tac-toe rules.
//! Rules are kept apart from history storage so the store can derive status
//! on demand instead of caching it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, WinningLine, LINES};
