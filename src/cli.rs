//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move-history time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move-history time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start with the move list newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a command script and print the resulting game
    Replay {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Start with the move list newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Script tokens: 1-9 play a cell, @<index> jumps, s toggles sort.
        /// Tokens may also be separated by spaces or commas inside one argument.
        #[arg(required = true)]
        commands: Vec<String>,
    },
}

impl Command {
    /// Splits replay arguments into individual script tokens.
    pub fn script_tokens(commands: &[String]) -> Vec<&str> {
        commands
            .iter()
            .flat_map(|arg| arg.split([' ', ',']))
            .filter(|token| !token.is_empty())
            .collect()
    }
}
