//! Front-end settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use mathgame_quiz::Difficulty;
use mathgame_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// All front-end settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Tic-tac-toe session settings.
    #[serde(default)]
    tictactoe: TicTacToeSettings,

    /// Arithmetic quiz settings.
    #[serde(default)]
    quiz: QuizSettings,
}

/// Settings for a tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    /// Play against the computer instead of a second human.
    #[serde(default)]
    against_computer: bool,

    /// Mark the computer plays.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Pause before the computer's reply, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,
}

/// Settings for an arithmetic quiz run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Upper bound for generated numbers.
    #[serde(default)]
    difficulty: Difficulty,

    /// Number of problems per run.
    #[serde(default = "default_rounds")]
    rounds: u32,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_rounds() -> u32 {
    10
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            against_computer: false,
            computer_mark: default_computer_mark(),
            computer_delay_ms: default_computer_delay_ms(),
        }
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            rounds: default_rounds(),
        }
    }
}

impl TicTacToeSettings {
    /// Pause before the computer's reply.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn apply_overrides(&mut self, against_computer: bool, delay_ms: Option<u64>) {
        self.against_computer |= against_computer;
        if let Some(delay_ms) = delay_ms {
            self.computer_delay_ms = delay_ms;
        }
    }
}

impl QuizSettings {
    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn apply_overrides(&mut self, difficulty: Option<u32>, rounds: Option<u32>) {
        if let Some(difficulty) = difficulty {
            self.difficulty = Difficulty(difficulty);
        }
        if let Some(rounds) = rounds {
            self.rounds = rounds;
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let settings = Self::from_toml(&content)?;
        info!(
            against_computer = settings.tictactoe.against_computer,
            difficulty = %settings.quiz.difficulty,
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Mutable access to the tic-tac-toe settings.
    pub fn tictactoe_mut(&mut self) -> &mut TicTacToeSettings {
        &mut self.tictactoe
    }

    /// Mutable access to the quiz settings.
    pub fn quiz_mut(&mut self) -> &mut QuizSettings {
        &mut self.quiz
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
