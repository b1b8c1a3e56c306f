//! Tests for the terminal UI state machine through its public API.

use crossterm::event::KeyCode;
use rewind::tui::{App, Focus};
use rewind_tictactoe::{GameHistory, GameStatus, Player};

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_play_draw_from_digits() {
    let mut app = App::new(GameHistory::new());
    press(&mut app, "123546879");
    assert_eq!(app.view().status(), &GameStatus::Draw);
    assert_eq!(app.game().len(), 10);
}

#[test]
fn test_board_locked_after_win_until_rewind() {
    let mut app = App::new(GameHistory::new());
    press(&mut app, "14253");
    assert_eq!(app.view().status(), &GameStatus::Won(Player::X));

    press(&mut app, "9");
    assert_eq!(app.game().len(), 6);
    assert!(app.hint().is_some());

    app.handle_key(KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Moves);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().current_move(), 4);
    assert_eq!(app.view().status(), &GameStatus::NextPlayer(Player::X));

    press(&mut app, "9");
    assert_eq!(app.game().len(), 6);
    assert_eq!(app.game().current_move(), 5);
    assert_eq!(app.view().status(), &GameStatus::NextPlayer(Player::O));
}

#[test]
fn test_descending_app_selects_newest_first() {
    let mut app = App::new(GameHistory::with_sort_order(false));
    press(&mut app, "15");
    assert_eq!(app.selected(), 0);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::End);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().current_move(), 0);
    assert_eq!(app.selected(), 2);
}
