//! Move application and session reset.

use super::action::{MoveError, MoveOutcome, Rejection};
use super::rules::evaluate_terminal;
use super::{GameState, Position};
use tracing::{debug, info, instrument};

/// Applies a move for the current player at `index` (0-8).
///
/// On success the mark is placed, the board is evaluated, and the turn
/// passes to the opponent unless the game just ended. Moves on an occupied
/// square or after the game ended are ignored and leave `state` untouched.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if `index` is not a board square; the
/// state is not modified.
#[instrument(skip(state), fields(player = ?state.current_player()))]
pub fn apply_move(state: &mut GameState, index: usize) -> Result<MoveOutcome, MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

    if state.is_terminal() {
        debug!("Ignoring move, game is already over");
        return Ok(MoveOutcome::Ignored(Rejection::GameOver));
    }

    if !state.board().is_empty(position) {
        debug!(%position, "Ignoring move, square is occupied");
        return Ok(MoveOutcome::Ignored(Rejection::SquareOccupied(position)));
    }

    state.place_current(position);
    let status = evaluate_terminal(state.board()).status();
    state.advance(status);

    if status.is_terminal() {
        info!(%status, moves = state.history().len(), "Game over");
    } else {
        debug!(%position, next = ?state.current_player(), "Move applied");
    }

    Ok(MoveOutcome::Placed { position, status })
}

/// Starts a new session: empty board, X to move, not terminal, no winner.
#[instrument]
pub fn reset_game() -> GameState {
    GameState::new()
}
