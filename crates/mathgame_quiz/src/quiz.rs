//! Running quiz session with a score.

use super::problem::{Difficulty, Problem};
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of answering one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Whether the chosen value was the sum.
    pub correct: bool,
    /// The value the player picked.
    pub chosen: u32,
    /// The correct sum.
    pub expected: u32,
    /// Score after this answer.
    pub score: i32,
}

/// Error answering a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum QuizError {
    /// The choice index is not one of the nine grid cells.
    #[display("Choice {} out of bounds (must be 0-8)", _0)]
    ChoiceOutOfBounds(#[error(not(source))] usize),
}

/// An arithmetic quiz: one problem at a time and a running score.
///
/// A correct answer adds one point, a wrong one subtracts one, and a new
/// problem is generated after every answer.
#[derive(Debug)]
pub struct Quiz<R> {
    rng: R,
    difficulty: Difficulty,
    problem: Problem,
    score: i32,
}

impl<R: Rng> Quiz<R> {
    /// Starts a quiz with a freshly generated problem and a score of zero.
    #[instrument(skip(rng))]
    pub fn new(mut rng: R, difficulty: Difficulty) -> Self {
        let problem = Problem::generate(&mut rng, difficulty);
        Self {
            rng,
            difficulty,
            problem,
            score: 0,
        }
    }

    /// The problem currently shown.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Current score (may be negative).
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The difficulty problems are generated with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Answers the current problem with the choice at `index` (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::ChoiceOutOfBounds`] for `index >= 9`; the score
    /// and problem are left unchanged.
    #[instrument(skip(self), fields(problem = %self.problem.prompt()))]
    pub fn answer(&mut self, index: usize) -> Result<Answer, QuizError> {
        let chosen = *self
            .problem
            .choices()
            .get(index)
            .ok_or(QuizError::ChoiceOutOfBounds(index))?;
        let expected = self.problem.answer();
        let correct = chosen == expected;

        self.score += if correct { 1 } else { -1 };
        debug!(chosen, expected, correct, score = self.score, "Answer checked");

        self.problem = Problem::generate(&mut self.rng, self.difficulty);
        Ok(Answer {
            correct,
            chosen,
            expected,
            score: self.score,
        })
    }

    /// Index of the first choice holding the correct sum.
    pub fn correct_index(&self) -> Option<usize> {
        let expected = self.problem.answer();
        self.problem.choices().iter().position(|c| *c == expected)
    }
}
