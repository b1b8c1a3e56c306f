//! Application state and key handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameHistory, GameView, Position};
use tracing::{debug, instrument, warn};

use super::input;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    /// Display row selected in the move list.
    selected: usize,
    /// Why the last action did nothing, if it did nothing.
    hint: Option<String>,
    quit: bool,
}

impl App {
    /// Creates an application around a fresh game.
    pub fn new(game: GameHistory) -> Self {
        let mut app = Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            hint: None,
            quit: false,
        };
        app.select_current();
        app
    }

    /// The game being played.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Fresh view of the game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected display row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Reason the last action was refused.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.quit = true;
            }
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('s') => {
                self.game.toggle_sort_order();
                self.hint = None;
                // Keep the selection on the same history entry.
                self.selected = self.game.len() - 1 - self.selected;
            }
            code => {
                if let Some(pos) = input::digit_position(code) {
                    self.cursor = pos;
                    self.play(pos);
                    return;
                }
                match self.focus {
                    Focus::Board => self.handle_board_key(code),
                    Focus::Moves => self.handle_moves_key(code),
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = input::move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            code => self.selected = input::move_selection(self.selected, self.game.len(), code),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
        self.select_current();
        debug!(focus = ?self.focus, "Focus changed");
    }

    #[instrument(skip(self))]
    fn play(&mut self, pos: Position) {
        match self.game.attempt_move(pos) {
            Ok(player) => {
                debug!(%player, position = %pos, "Move applied");
                self.hint = None;
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.hint = Some(e.to_string());
            }
        }
        self.select_current();
    }

    fn jump_to_selected(&mut self) {
        let entries = self.game.move_entries();
        // The selection is always a listed row, so the jump stays in range.
        if let Some(entry) = entries.get(self.selected) {
            if entry.is_actionable() {
                self.game.jump_to(*entry.index());
                self.hint = None;
            }
        }
        self.select_current();
    }

    /// Points the list selection at the displayed snapshot.
    fn select_current(&mut self) {
        let current = self.game.current_move();
        self.selected = if self.game.is_ascending() {
            current
        } else {
            self.game.len() - 1 - current
        };
    }
}
