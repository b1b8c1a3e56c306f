//! Rewind - tic-tac-toe with move-history time travel.
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate is the shell
//! around it.
//!
//! # Architecture
//!
//! - **CLI**: `play` opens the terminal UI, `replay` runs a command script
//!   headlessly and prints the result
//! - **Config**: optional TOML file for logging and the initial sort order
//! - **TUI**: ratatui rendering surface with board and move list panels
//! - **Script**: parser and runner for replay tokens
//!
//! # Example
//!
//! ```rust
//! use rewind::script::{parse_script, run_script};
//! use rewind::text::render_view;
//! use rewind_tictactoe::GameHistory;
//!
//! let mut game = GameHistory::new();
//! let commands = parse_script(&["5", "1", "@1", "9"]).unwrap();
//! let rejected = run_script(&mut game, &commands).unwrap();
//! assert!(rejected.is_empty());
//! assert!(render_view(&game.view()).starts_with("Next player: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod script;
pub mod text;
pub mod tui;

pub use config::{AppConfig, ConfigError};
