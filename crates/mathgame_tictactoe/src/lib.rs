//! Pure tic-tac-toe game logic.
//!
//! Board state, move legality, win/draw detection and an exhaustive minimax
//! opponent. Everything here is synchronous and free of I/O; a front-end owns
//! a [`GameState`], feeds it cell indices through [`apply_move`], and asks
//! [`computer_move`] (or a [`Minimax`] for either mark) for the computer's
//! reply.
//!
//! # Example
//!
//! ```
//! use mathgame_tictactoe::{apply_move, computer_move, reset_game, GameStatus};
//!
//! let mut state = reset_game();
//! apply_move(&mut state, 4).unwrap();
//! let reply = computer_move(state.board()).unwrap();
//! apply_move(&mut state, reply.to_index()).unwrap();
//! assert_eq!(state.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{MoveError, MoveOutcome, Rejection};
pub use engine::{apply_move, reset_game};
pub use position::Position;
pub use rules::{Evaluation, LINES, evaluate_terminal};
pub use search::{DRAW, LOSS, Minimax, WIN, computer_move};
pub use types::{Board, GameState, GameStatus, ParseBoardError, Player, Square};

/// Alias for clarity at call sites that talk about marks rather than players.
pub type Mark = Player;
