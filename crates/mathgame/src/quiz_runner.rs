//! Line-based arithmetic quiz session.

use anyhow::{Context, Result};
use mathgame_quiz::{CHOICES, Quiz};
use rand::Rng;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

/// Plays a fixed number of quiz rounds over a line-based input and output.
pub struct QuizRunner<R, I, W> {
    quiz: Quiz<R>,
    input: I,
    output: W,
}

impl<R, I, W> QuizRunner<R, I, W>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    /// Creates a runner for `quiz`.
    pub fn new(quiz: Quiz<R>, input: I, output: W) -> Self {
        Self {
            quiz,
            input,
            output,
        }
    }

    /// The quiz being played.
    pub fn quiz(&self) -> &Quiz<R> {
        &self.quiz
    }

    /// Plays `rounds` problems and returns the final score.
    ///
    /// Stops early, keeping the score so far, if the input closes.
    #[instrument(skip(self))]
    pub async fn run(&mut self, rounds: u32) -> Result<i32> {
        info!(difficulty = %self.quiz.difficulty(), "Starting quiz");

        for round in 1..=rounds {
            let Some(index) = self.read_choice(round).await? else {
                debug!(round, "Input closed, ending quiz");
                break;
            };

            let answer = self.quiz.answer(index)?;
            if answer.correct {
                writeln!(self.output, "Correct!")?;
            } else {
                writeln!(
                    self.output,
                    "Wrong: {} is not the sum, it was {}.",
                    answer.chosen, answer.expected
                )?;
            }
            writeln!(self.output, "Score: {}", answer.score)?;
        }

        let score = self.quiz.score();
        info!(score, "Quiz finished");
        Ok(score)
    }

    /// Shows the current problem and reads a 1-based choice number.
    ///
    /// Returns the 0-based index, or `None` once input is exhausted.
    async fn read_choice(&mut self, round: u32) -> Result<Option<usize>> {
        loop {
            let problem = self.quiz.problem();
            writeln!(self.output, "\nRound {}: {} = ?", round, problem.prompt())?;
            writeln!(self.output, "{}", problem.display_choices())?;
            writeln!(self.output, "Pick a choice [1-{}]:", CHOICES)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .await
                .context("Failed to read answer")?;
            if read == 0 {
                return Ok(None);
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=CHOICES).contains(&choice) => return Ok(Some(choice - 1)),
                _ => writeln!(self.output, "'{}' is not a choice, try again.", line.trim())?,
            }
        }
    }
}
