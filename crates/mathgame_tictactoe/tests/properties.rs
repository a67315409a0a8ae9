//! Property-based tests for board evaluation and move application.

use mathgame_tictactoe::{
    Board, GameState, GameStatus, LINES, Player, Position, Square, apply_move, computer_move,
    evaluate_terminal, reset_game,
};
use proptest::prelude::*;

/// Generate a random mark.
fn arb_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// Generate an arbitrary board, legal or not.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ])
    .prop_map(Board::from_squares)
}

/// Generate a board with no empty squares.
fn arb_full_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_player().prop_map(Square::Occupied)).prop_map(Board::from_squares)
}

/// Generate a state reached by random play from a fresh game.
fn arb_played_state() -> impl Strategy<Value = GameState> {
    proptest::collection::vec(0usize..9, 0..12).prop_map(|choices| {
        let mut state = reset_game();
        for choice in choices {
            if state.is_terminal() {
                break;
            }
            let moves = Position::valid_moves(state.board());
            let pos = moves[choice % moves.len()];
            apply_move(&mut state, pos.to_index()).unwrap();
        }
        state
    })
}

proptest! {
    #[test]
    fn full_board_is_terminal_and_draw_without_line(board in arb_full_board()) {
        let has_line = LINES.iter().any(|line| {
            let first = board.square(line[0]);
            line.iter().all(|p| board.square(*p) == first)
        });

        let eval = evaluate_terminal(&board);
        prop_assert!(eval.is_terminal);
        prop_assert_eq!(eval.winner.is_none(), !has_line);
        if !has_line {
            prop_assert_eq!(eval.status(), GameStatus::Draw);
        }
    }

    #[test]
    fn completed_line_reports_winner(
        board in arb_board(),
        line in 0usize..8,
        player in arb_player(),
    ) {
        // Paint one line and erase the other player's marks so only one
        // player can own a line.
        let mut squares = *board.squares();
        for square in squares.iter_mut() {
            if *square == Square::Occupied(player.opponent()) {
                *square = Square::Empty;
            }
        }
        let mut board = Board::from_squares(squares);
        for pos in LINES[line] {
            board.put(pos, Square::Occupied(player));
        }

        let eval = evaluate_terminal(&board);
        prop_assert!(eval.is_terminal);
        prop_assert_eq!(eval.winner, Some(player));
    }

    #[test]
    fn illegal_moves_do_not_mutate(state in arb_played_state(), index in 0usize..12) {
        let mut after = state.clone();
        let outcome = apply_move(&mut after, index);
        let legal = index < 9
            && !state.is_terminal()
            && state.board().get(index) == Some(Square::Empty);

        if legal {
            prop_assert!(outcome.unwrap().is_placed());
            prop_assert_eq!(after.history().len(), state.history().len() + 1);
        } else {
            prop_assert_eq!(after, state);
        }
    }

    #[test]
    fn marks_stay_balanced(state in arb_played_state()) {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        prop_assert!(x >= o && o + 1 >= x);
        if !state.is_terminal() {
            let expected = if x == o { Player::X } else { Player::O };
            prop_assert_eq!(state.current_player(), expected);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn computer_move_is_on_empty_square(state in arb_played_state()) {
        prop_assume!(state.status() == GameStatus::InProgress);
        let pos = computer_move(state.board()).unwrap();
        prop_assert!(state.board().is_empty(pos));
    }
}
