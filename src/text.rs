//! Plain-text rendering of a game view.

use rewind_tictactoe::{Board, GameView};
use std::fmt;
use tracing::instrument;

/// Renders the status, board and move list as text.
///
/// The move list is numbered by display row; the current entry is marked
/// with `>`.
#[instrument(skip(view), fields(current = view.current_move()))]
pub fn render_view(view: &GameView) -> String {
    TextView(view).to_string()
}

struct TextView<'a>(&'a GameView);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(f, "{}", view.status())?;
        writeln!(f)?;
        writeln!(f, "{}", Board::from_squares(*view.squares()).display())?;

        if let Some(line) = view.winning_line() {
            let cells: Vec<String> = line.cells.iter().map(|pos| pos.coordinate()).collect();
            writeln!(f, "Winning line: {}", cells.join(" "))?;
        }

        writeln!(f)?;
        writeln!(f, "[{}]", view.sort_label())?;
        for (row, entry) in view.moves().iter().enumerate() {
            let marker = if *entry.is_current() { '>' } else { ' ' };
            writeln!(f, "{marker} {}. {}", row + 1, entry.label())?;
        }
        Ok(())
    }
}
