//! Command-line interface for mathgame.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MathGame - arithmetic quiz and tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "mathgame")]
#[command(about = "Arithmetic quiz and tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe (two players, or against the computer)
    Tictactoe {
        /// Play against the computer
        #[arg(long)]
        computer: bool,

        /// Pause before the computer's reply, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Play the arithmetic quiz: pick the sum from nine choices
    Quiz {
        /// Upper bound for generated numbers
        #[arg(short, long)]
        difficulty: Option<u32>,

        /// Number of problems
        #[arg(short, long)]
        rounds: Option<u32>,
    },
}
