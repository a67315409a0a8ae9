//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the engine and the search both call
//! into these on real and hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Terminal evaluation of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Owner of the first completed line, if any.
    pub winner: Option<Player>,
    /// True if the board is won or full.
    pub is_terminal: bool,
}

impl Evaluation {
    /// Converts the evaluation into a game status.
    pub fn status(self) -> GameStatus {
        match (self.winner, self.is_terminal) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }
}

/// Evaluates whether the board is terminal and who, if anyone, won.
///
/// Lines are checked in a fixed order (rows, columns, diagonals) and the
/// first completed line decides the winner. A full board without a completed
/// line is a draw.
pub fn evaluate_terminal(board: &Board) -> Evaluation {
    match check_winner(board) {
        Some(player) => Evaluation {
            winner: Some(player),
            is_terminal: true,
        },
        None => Evaluation {
            winner: None,
            is_terminal: is_full(board),
        },
    }
}
