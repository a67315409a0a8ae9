//! Seating players for a tic-tac-toe session.

use crate::config::TicTacToeSettings;
use crate::players::{ComputerPlayer, HumanPlayer, Player, SharedInput};
use mathgame_tictactoe::Mark;
use tokio::io::AsyncBufRead;
use tracing::{info, instrument};

/// Builds the X and O players for the configured game mode.
///
/// Against the computer, the computer takes its configured mark and the
/// human takes the other one. Otherwise two humans share `input`.
#[instrument(skip(input))]
pub fn seat_players<R>(
    settings: &TicTacToeSettings,
    input: SharedInput<R>,
) -> (Box<dyn Player>, Box<dyn Player>)
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    if !*settings.against_computer() {
        info!("Two-player mode");
        return (
            Box::new(HumanPlayer::new("Player 1", input.clone())),
            Box::new(HumanPlayer::new("Player 2", input)),
        );
    }

    let computer_mark = *settings.computer_mark();
    info!(?computer_mark, "Playing against the computer");
    let computer: Box<dyn Player> = Box::new(ComputerPlayer::new(
        "Computer",
        computer_mark,
        settings.computer_delay(),
    ));
    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", input));

    match computer_mark {
        Mark::X => (computer, human),
        Mark::O => (human, computer),
    }
}
