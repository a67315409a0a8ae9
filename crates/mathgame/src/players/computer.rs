//! Computer player backed by the minimax search.

use super::Player;
use anyhow::Result;
use mathgame_tictactoe::{GameState, Mark, Minimax};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent that plays perfectly after a short pause.
///
/// The pause only paces the game for the human watching; the search itself
/// runs synchronously once it ends.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    engine: Minimax,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark, delay: Duration) -> Self {
        Self {
            name: name.into(),
            engine: Minimax::new(mark),
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, state), fields(player = %self.name))]
    async fn get_move(&mut self, state: &GameState) -> Result<usize> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let pos = self
            .engine
            .best_move(state.board())
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(position = %pos, "Computer chose position");
        Ok(pos.to_index())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
