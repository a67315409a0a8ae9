//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, SharedInput, read_line, shared_input};

use anyhow::Result;
use mathgame_tictactoe::{GameState, Rejection};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the board index (0-8) for the next move.
    async fn get_move(&mut self, state: &GameState) -> Result<usize>;

    /// Called when the chosen move was ignored by the engine; the
    /// orchestrator asks again afterwards.
    fn move_ignored(&mut self, _rejection: Rejection) {}

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
