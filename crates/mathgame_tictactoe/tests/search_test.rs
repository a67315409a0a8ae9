//! Tests verifying the minimax opponent plays tic-tac-toe perfectly.

use mathgame_tictactoe::{
    Board, DRAW, GameState, GameStatus, LOSS, Minimax, Player, Position, WIN, apply_move,
    computer_move, reset_game,
};

#[test]
fn test_empty_board_picks_lowest_index() {
    assert_eq!(computer_move(&Board::new()), Some(Position::TopLeft));
}

#[test]
fn test_empty_board_scores_are_all_draws() {
    let scores = Minimax::new(Player::O).score_moves(&Board::new());
    assert_eq!(scores.len(), 9);
    assert!(scores.iter().all(|(_, score)| *score == DRAW));
}

#[test]
fn test_block_and_fork_preferred_by_index() {
    // X X . / O O . / . . .
    // Square 2 blocks X and forks (5 and 6); square 5 wins at once. Both
    // score a win and the lower index is kept.
    let board: Board = "XX.|OO.|...".parse().unwrap();
    let scores = Minimax::new(Player::O).score_moves(&board);
    assert!(scores.contains(&(Position::TopRight, WIN)));
    assert!(scores.contains(&(Position::MiddleRight, WIN)));
    assert_eq!(computer_move(&board), Some(Position::TopRight));
}

#[test]
fn test_answers_corner_opening_with_center() {
    let board: Board = "X........".parse().unwrap();
    assert_eq!(computer_move(&board), Some(Position::Center));
}

#[test]
fn test_center_opening_scores_respect_symmetry() {
    let board: Board = "....X....".parse().unwrap();
    let scores = Minimax::new(Player::O).score_moves(&board);

    let score_of = |pos: Position| {
        scores
            .iter()
            .find(|(p, _)| *p == pos)
            .map(|(_, s)| *s)
            .unwrap()
    };
    for corner in [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ] {
        assert_eq!(score_of(corner), DRAW, "corner {corner}");
    }
    for edge in [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ] {
        assert_eq!(score_of(edge), LOSS, "edge {edge}");
    }
    assert_eq!(computer_move(&board), Some(Position::TopLeft));
}

/// Rotates a row-major index a quarter turn clockwise.
fn rotate(index: usize) -> usize {
    let (row, col) = (index / 3, index % 3);
    col * 3 + (2 - row)
}

#[test]
fn test_scores_invariant_under_rotation() {
    let boards = ["X........", "X...O...X", ".X..O....", "XO..X...."];
    for text in boards {
        let board: Board = text.parse().unwrap();
        let mut rotated = Board::new();
        for (index, square) in board.squares().iter().enumerate() {
            rotated.set(rotate(index), *square).unwrap();
        }

        let engine = Minimax::new(Player::O);
        let original = engine.score_moves(&board);
        let turned = engine.score_moves(&rotated);
        for (pos, score) in original {
            let image = Position::from_index(rotate(pos.to_index())).unwrap();
            assert!(
                turned.contains(&(image, score)),
                "board {text}: {pos} scored {score} but its rotation did not"
            );
        }
    }
}

#[test]
fn test_never_returns_occupied_square() {
    let board: Board = "XO.|.X.|O..".parse().unwrap();
    let pos = computer_move(&board).unwrap();
    assert!(board.is_empty(pos));
}

/// Plays every possible X strategy against the engine as O, recursing over
/// each X choice. Returns the number of finished games.
fn explore_as_x(state: &GameState, engine: &Minimax) -> usize {
    if state.is_terminal() {
        assert_ne!(
            state.status(),
            GameStatus::Won(engine.player().opponent()),
            "engine lost:\n{}",
            state.board()
        );
        return 1;
    }

    let mut games = 0;
    for pos in Position::valid_moves(state.board()) {
        let mut next = state.clone();
        apply_move(&mut next, pos.to_index()).unwrap();
        if !next.is_terminal() {
            let reply = engine.best_move(next.board()).unwrap();
            assert!(next.board().is_empty(reply));
            apply_move(&mut next, reply.to_index()).unwrap();
        }
        games += explore_as_x(&next, engine);
    }
    games
}

#[test]
fn test_o_never_loses_against_any_strategy() {
    let engine = Minimax::new(Player::O);
    let games = explore_as_x(&reset_game(), &engine);
    assert!(games > 0);
}

#[test]
fn test_x_never_loses_against_any_strategy() {
    let engine = Minimax::new(Player::X);
    let mut state = reset_game();
    let opening = engine.best_move(state.board()).unwrap();
    apply_move(&mut state, opening.to_index()).unwrap();

    // From here O plays every possible reply and the engine answers as X.
    fn explore(state: &GameState, engine: &Minimax) {
        if state.is_terminal() {
            assert_ne!(state.status(), GameStatus::Won(Player::O));
            return;
        }
        for pos in Position::valid_moves(state.board()) {
            let mut next = state.clone();
            apply_move(&mut next, pos.to_index()).unwrap();
            if !next.is_terminal() {
                let reply = engine.best_move(next.board()).unwrap();
                apply_move(&mut next, reply.to_index()).unwrap();
            }
            explore(&next, engine);
        }
    }
    explore(&state, &engine);
}

#[test]
fn test_engine_self_play_is_a_draw() {
    let x = Minimax::new(Player::X);
    let o = Minimax::new(Player::O);
    let mut state = reset_game();
    while !state.is_terminal() {
        let engine = if state.current_player() == Player::X { &x } else { &o };
        let pos = engine.best_move(state.board()).unwrap();
        apply_move(&mut state, pos.to_index()).unwrap();
    }
    assert_eq!(state.status(), GameStatus::Draw);
}
