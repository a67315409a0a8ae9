//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use mathgame_tictactoe::{
    GameState, GameStatus, Mark, MoveOutcome, Position, apply_move, reset_game,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board rendering after a change.
    StateChanged(String),
    /// A player is about to choose a move.
    Thinking {
        /// Player name.
        player: String,
        /// Mark the player is placing.
        mark: Mark,
    },
    /// Move was made.
    MoveMade {
        /// Player name.
        player: String,
        /// Where the mark went.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// Name of the winner, `None` for a draw.
        winner: Option<String>,
    },
}

/// Orchestrates one tic-tac-toe session between two players.
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            state: reset_game(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs the game loop until the game ends, returning the final status.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.event_tx
            .send(GameEvent::StateChanged(self.state.board().display()))?;

        while !self.state.is_terminal() {
            let mark = self.state.current_player();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            self.event_tx.send(GameEvent::Thinking {
                player: player_name.clone(),
                mark,
            })?;

            debug!(player = %player_name, "Waiting for move");
            let index = player.get_move(&self.state).await?;

            match apply_move(&mut self.state, index)? {
                MoveOutcome::Placed { position, .. } => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        position,
                    })?;
                    self.event_tx
                        .send(GameEvent::StateChanged(self.state.board().display()))?;
                }
                MoveOutcome::Ignored(rejection) => {
                    debug!(player = %player_name, %rejection, "Move ignored, asking again");
                    player.move_ignored(rejection);
                }
            }
        }

        let status = self.state.status();
        let winner = status.winner().map(|mark| match mark {
            Mark::X => self.player_x.name().to_string(),
            Mark::O => self.player_o.name().to_string(),
        });
        info!(%status, ?winner, "Game finished");
        self.event_tx.send(GameEvent::GameOver { winner })?;
        Ok(status)
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = reset_game();
    }
}
