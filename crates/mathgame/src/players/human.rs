//! Human player that reads moves from a line-based input.

use super::Player;
use anyhow::{Context, Result};
use mathgame_tictactoe::{GameState, Position, Rejection};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Line input shared between both human seats and the session prompts.
pub type SharedInput<R> = Arc<Mutex<R>>;

/// Wraps a reader so several players can take turns on it.
pub fn shared_input<R>(input: R) -> SharedInput<R> {
    Arc::new(Mutex::new(input))
}

/// Reads one trimmed line, or `None` at end of input.
pub async fn read_line<R>(input: &SharedInput<R>) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let read = input
        .lock()
        .await
        .read_line(&mut line)
        .await
        .context("Failed to read input")?;
    Ok((read > 0).then(|| line.trim().to_string()))
}

/// Human player typing a cell number (1-9) or a position label per line.
pub struct HumanPlayer<R> {
    name: String,
    input: SharedInput<R>,
}

impl<R> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: SharedInput<R>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    #[instrument(skip(self, _state), fields(player = %self.name))]
    async fn get_move(&mut self, _state: &GameState) -> Result<usize> {
        loop {
            let Some(line) = read_line(&self.input).await? else {
                anyhow::bail!("Input closed");
            };

            match Position::from_label_or_number(&line) {
                Some(pos) => return Ok(pos.to_index()),
                None => {
                    debug!(input = %line, "Unrecognized move");
                    println!("'{}' is not a cell, try again.", line);
                }
            }
        }
    }

    fn move_ignored(&mut self, rejection: Rejection) {
        println!("{}, try again.", rejection);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
