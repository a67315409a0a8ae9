//! MathGame - Unified CLI
//!
//! Arithmetic quiz and tic-tac-toe on the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use mathgame::{
    GameEvent, Orchestrator, QuizRunner, QuizSettings, Settings, TicTacToeSettings, read_line,
    seat_players, shared_input,
};
use mathgame_quiz::Quiz;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr and stay quiet unless RUST_LOG asks for them, so
    // they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings =
        Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Command::Tictactoe { computer, delay_ms } => {
            settings
                .tictactoe_mut()
                .apply_overrides(computer, delay_ms);
            run_tictactoe(settings.tictactoe()).await
        }
        Command::Quiz { difficulty, rounds } => {
            settings.quiz_mut().apply_overrides(difficulty, rounds);
            run_quiz(settings.quiz()).await
        }
    }
}

/// Run tic-tac-toe sessions until the players decline a rematch
#[instrument(skip(settings))]
async fn run_tictactoe(settings: &TicTacToeSettings) -> Result<()> {
    info!(?settings, "Starting tic-tac-toe");

    let input = shared_input(BufReader::new(tokio::io::stdin()));
    let (player_x, player_o) = seat_players(settings, input.clone());

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = spawn_renderer(event_rx);
    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);

    println!("Tic-tac-toe: enter a cell number 1-9 to place your mark.");
    loop {
        let status = orchestrator.run().await?;
        debug!(%status, "Session ended");

        let again = read_line(&input).await?;
        if !matches!(again.as_deref(), Some("y" | "Y" | "yes")) {
            break;
        }
        orchestrator.restart();
    }

    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;
    Ok(())
}

/// Prints game events in the order they were sent
fn spawn_renderer(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                GameEvent::StateChanged(board) => println!("\n{}\n", board),
                GameEvent::Thinking { player, mark } => println!("{} ({}) to move.", player, mark),
                GameEvent::MoveMade { player, position } => {
                    println!("{} played {}.", player, position)
                }
                GameEvent::GameOver { winner } => {
                    match winner {
                        Some(name) => println!("Winner: {}!", name),
                        None => println!("Draw!"),
                    }
                    println!("Play again? [y/N]");
                }
            }
        }
    })
}

/// Run the arithmetic quiz
#[instrument(skip(settings))]
async fn run_quiz(settings: &QuizSettings) -> Result<()> {
    let quiz = Quiz::new(rand::thread_rng(), *settings.difficulty());
    let mut runner = QuizRunner::new(
        quiz,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );

    let score = runner.run(*settings.rounds()).await?;
    println!("\nFinal score: {}", score);
    Ok(())
}
