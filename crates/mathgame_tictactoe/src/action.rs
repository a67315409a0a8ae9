//! Outcomes and errors of applying a move.
//!
//! Clicking an occupied cell or playing after the game ended is not an
//! error: the move is ignored and the state is left untouched. Only an index
//! outside the board is rejected as an error.

use super::{GameStatus, Position};
use serde::{Deserialize, Serialize};

/// Result of a call to [`apply_move`](crate::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed; `status` is the game status after the move.
    Placed {
        /// Where the mark was placed.
        position: Position,
        /// Game status after the move.
        status: GameStatus,
    },
    /// The move was illegal and the state is unchanged.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move changed the game state.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
