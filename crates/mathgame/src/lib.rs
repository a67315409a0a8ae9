//! MathGame library - terminal front-end for the quiz and tic-tac-toe.
//!
//! The game logic lives in `mathgame_tictactoe` and `mathgame_quiz`; this
//! crate seats players, paces the computer opponent, and drives both games
//! over line-based input.
//!
//! # Architecture
//!
//! - **Settings**: TOML configuration with defaults and CLI overrides
//! - **Players**: human (line input) and computer (minimax) players
//! - **Orchestrator**: runs a tic-tac-toe session and emits [`GameEvent`]s
//! - **QuizRunner**: plays rounds of the arithmetic quiz

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod quiz_runner;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, QuizSettings, Settings, TicTacToeSettings};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, Player, SharedInput, read_line, shared_input};

// Crate-level exports - Game drivers
pub use orchestrator::{GameEvent, Orchestrator};
pub use quiz_runner::QuizRunner;
pub use session::seat_players;
