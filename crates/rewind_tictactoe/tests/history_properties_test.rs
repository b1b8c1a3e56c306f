//! Property-based tests for win detection and the move history.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated boards and move sequences.

use proptest::prelude::*;
use rewind_tictactoe::{rules, Board, GameHistory, MoveError, Player, Position, Square};

prop_compose! {
    fn arbitrary_square()(variant in 0..3u8) -> Square {
        match variant {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(squares in prop::array::uniform9(arbitrary_square())) -> Board {
        let mut board = Board::new();
        for (pos, square) in Position::ALL.into_iter().zip(squares) {
            board.set(pos, square);
        }
        board
    }
}

/// Replays raw cell choices, skipping rejected ones, and returns the game.
fn replay(cells: &[usize]) -> GameHistory {
    let mut game = GameHistory::new();
    for &cell in cells {
        let _ = game.attempt_move_at(cell);
    }
    game
}

/// Win lines in reporting order: rows, columns, main then anti diagonal.
const EXPECTED_ORDER: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_completed(board: &Board, line: &[usize; 3]) -> Option<Player> {
    let squares = board.squares();
    let player = squares[line[0]].player()?;
    line.iter()
        .all(|&index| squares[index] == Square::Occupied(player))
        .then_some(player)
}

proptest! {
    #[test]
    fn winner_is_first_completed_line(board in arbitrary_board()) {
        let expected = EXPECTED_ORDER
            .iter()
            .find_map(|line| line_completed(&board, line).map(|player| (player, *line)));
        let found = rules::check_winner(&board).map(|line| (line.player, line.indices()));
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn rejected_moves_change_nothing(
        cells in prop::collection::vec(0..9usize, 0..12),
        target in 0..9usize,
    ) {
        let mut game = replay(&cells);
        let before = game.clone();
        match game.attempt_move_at(target) {
            Ok(_) => {
                prop_assert_eq!(game.current_move(), before.current_move() + 1);
                prop_assert_eq!(game.len(), before.current_move() + 2);
            }
            Err(MoveError::SquareOccupied(_)) | Err(MoveError::GameOver(_)) => {
                prop_assert_eq!(&game, &before);
            }
            Err(other) => prop_assert!(false, "unexpected rejection: {}", other),
        }
    }

    #[test]
    fn placed_mark_follows_turn_parity(
        cells in prop::collection::vec(0..9usize, 0..12),
        target in 0..9usize,
    ) {
        let mut game = replay(&cells);
        let parity = game.current_move() % 2;
        if let Ok(player) = game.attempt_move_at(target) {
            let expected = if parity == 0 { Player::X } else { Player::O };
            prop_assert_eq!(player, expected);
            prop_assert_eq!(
                game.current_board().get(Position::ALL[target]),
                Square::Occupied(expected)
            );
        }
    }

    #[test]
    fn move_after_jump_truncates_to_k_plus_two(
        cells in prop::collection::vec(0..9usize, 1..12),
        pick in any::<prop::sample::Index>(),
        target in 0..9usize,
    ) {
        let mut game = replay(&cells);
        let k = pick.index(game.len());
        game.jump_to(k);
        if game.attempt_move_at(target).is_ok() {
            prop_assert_eq!(game.len(), k + 2);
            prop_assert_eq!(game.current_move(), k + 1);
            prop_assert_eq!(*game.current_snapshot().origin(), Some(Position::ALL[target]));
        }
    }

    #[test]
    fn sort_toggle_only_reorders(
        cells in prop::collection::vec(0..9usize, 0..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut game = replay(&cells);
        game.jump_to(pick.index(game.len()));
        let before = game.clone();
        let ascending = game.move_entries();

        game.toggle_sort_order();
        let mut descending = game.move_entries();
        descending.reverse();

        prop_assert_eq!(game.history(), before.history());
        prop_assert_eq!(game.current_move(), before.current_move());
        prop_assert_eq!(descending, ascending);

        game.toggle_sort_order();
        prop_assert_eq!(&game, &before);
    }
}
