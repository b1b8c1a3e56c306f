//! Headless command scripts for replaying a session.
//!
//! A script is a list of tokens: `1`-`9` plays that cell (1-based,
//! row-major), `@k` jumps to history index `k`, and `s` toggles the move
//! list order.

use derive_more::{Display, Error};
use rewind_tictactoe::{GameHistory, MoveError, Position};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// One step of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Attempt a move at the position.
    Play(Position),
    /// Jump to a history index.
    Jump(usize),
    /// Toggle the move list order.
    ToggleSort,
}

impl FromStr for ScriptCommand {
    type Err = ScriptError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("s") {
            return Ok(ScriptCommand::ToggleSort);
        }
        if let Some(index) = token.strip_prefix('@') {
            return parse_digits(index)
                .map(ScriptCommand::Jump)
                .ok_or_else(|| ScriptError::parse(token));
        }
        parse_digits(token)
            .and_then(|cell| cell.checked_sub(1))
            .and_then(Position::from_index)
            .map(ScriptCommand::Play)
            .ok_or_else(|| ScriptError::parse(token))
    }
}

/// Plain decimal digits, no sign.
fn parse_digits(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A move the store refused, with the script step that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("step {}: {}", step, error)]
pub struct Rejection {
    /// Zero-based script step.
    pub step: usize,
    /// Why the move was refused.
    pub error: MoveError,
}

/// Errors that stop a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ScriptError {
    /// A token that is not a cell, jump or toggle.
    #[display("Unrecognized script token '{}' (expected 1-9, @<index> or s)", token)]
    Parse {
        /// The offending token.
        token: String,
    },

    /// A jump past the end of the recorded history.
    #[display("Step {}: no move #{} (history has {} entries)", step, index, len)]
    NoSuchMove {
        /// Zero-based script step.
        step: usize,
        /// Requested history index.
        index: usize,
        /// History length at that step.
        len: usize,
    },
}

impl ScriptError {
    fn parse(token: &str) -> Self {
        ScriptError::Parse {
            token: token.to_string(),
        }
    }
}

/// Parses every token, failing on the first bad one.
#[instrument(skip(tokens))]
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ScriptCommand>, ScriptError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Applies `commands` to `game` in order.
///
/// Rejected moves are collected and the script carries on. Jumps are
/// checked against the history before reaching the store.
#[instrument(skip_all, fields(steps = commands.len()))]
pub fn run_script(
    game: &mut GameHistory,
    commands: &[ScriptCommand],
) -> Result<Vec<Rejection>, ScriptError> {
    let mut rejections = Vec::new();
    for (step, command) in commands.iter().enumerate() {
        match *command {
            ScriptCommand::Play(pos) => {
                if let Err(error) = game.attempt_move(pos) {
                    warn!(step, %error, "Scripted move rejected");
                    rejections.push(Rejection { step, error });
                }
            }
            ScriptCommand::Jump(index) => {
                if index >= game.len() {
                    return Err(ScriptError::NoSuchMove {
                        step,
                        index,
                        len: game.len(),
                    });
                }
                game.jump_to(index);
            }
            ScriptCommand::ToggleSort => game.toggle_sort_order(),
        }
    }
    info!(
        len = game.len(),
        current = game.current_move(),
        rejected = rejections.len(),
        "Script finished"
    );
    Ok(rejections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("1".parse::<ScriptCommand>(), Ok(ScriptCommand::Play(Position::TopLeft)));
        assert_eq!("9".parse::<ScriptCommand>(), Ok(ScriptCommand::Play(Position::BottomRight)));
        assert_eq!("@3".parse::<ScriptCommand>(), Ok(ScriptCommand::Jump(3)));
        assert_eq!("S".parse::<ScriptCommand>(), Ok(ScriptCommand::ToggleSort));
    }

    #[test]
    fn test_parse_rejects_out_of_range_cells() {
        for token in ["0", "10", "@", "@x", "left"] {
            assert!(
                matches!(token.parse::<ScriptCommand>(), Err(ScriptError::Parse { .. })),
                "{token} should not parse"
            );
        }
    }

    #[test]
    fn test_parse_rejects_signed_tokens() {
        for token in ["+5", "-5", "@+1", "@-1", "@ 1"] {
            assert_eq!(
                token.parse::<ScriptCommand>(),
                Err(ScriptError::Parse {
                    token: token.to_string()
                }),
                "{token} should not parse"
            );
        }
    }

    #[test]
    fn test_rejected_moves_are_collected() {
        let mut game = GameHistory::new();
        let commands = parse_script(&["5", "5", "1"]).unwrap();
        let rejections = run_script(&mut game, &commands).unwrap();

        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].step, 1);
        assert_eq!(rejections[0].error, MoveError::SquareOccupied(Position::Center));
        assert_eq!(game.len(), 3);
    }

    #[test]
    fn test_jump_past_history_is_an_error() {
        let mut game = GameHistory::new();
        let commands = parse_script(&["5", "@2"]).unwrap();
        assert_eq!(
            run_script(&mut game, &commands),
            Err(ScriptError::NoSuchMove {
                step: 1,
                index: 2,
                len: 2
            })
        );
    }
}
