//! Addition problems with nine shuffled answer choices.

use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of answer choices, laid out as a 3x3 grid.
pub const CHOICES: usize = 9;

/// Upper bound for generated numbers.
///
/// Each operand is drawn from `0..=difficulty / 2` and each distractor from
/// `0..=difficulty`, so every choice is in the same range as the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(pub u32);

impl Default for Difficulty {
    fn default() -> Self {
        Self(100)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single `first + second` problem.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Problem {
    /// Left operand.
    first: u32,
    /// Right operand.
    second: u32,
    /// Shuffled choices in row-major grid order; the sum appears at least once.
    choices: [u32; CHOICES],
}

impl Problem {
    /// Generates a new problem: two operands, eight random distractors and
    /// the correct sum, shuffled together.
    ///
    /// Distractors may coincide with the sum or with each other.
    #[instrument(skip(rng))]
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Self {
        let half = difficulty.0 / 2;
        let first = rng.gen_range(0..=half);
        let second = rng.gen_range(0..=half);

        let mut choices = [0u32; CHOICES];
        for choice in choices.iter_mut().take(CHOICES - 1) {
            *choice = rng.gen_range(0..=difficulty.0);
        }
        choices[CHOICES - 1] = first + second;
        choices.shuffle(rng);

        trace!(first, second, ?choices, "Generated problem");
        Self {
            first,
            second,
            choices,
        }
    }

    /// The correct answer.
    pub fn answer(&self) -> u32 {
        self.first + self.second
    }

    /// Returns true if the choice at `index` equals the sum.
    pub fn is_correct(&self, index: usize) -> bool {
        self.choices.get(index) == Some(&self.answer())
    }

    /// The problem as shown to the player, e.g. `"12 + 30"`.
    pub fn prompt(&self) -> String {
        format!("{} + {}", self.first, self.second)
    }

    /// Formats the choices as a 3x3 grid labelled with 1-based cell numbers.
    pub fn display_choices(&self) -> String {
        self.choices
            .chunks(3)
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, value)| format!("{}) {:>4}", row * 3 + col + 1, value))
                    .collect::<Vec<_>>()
                    .join("   ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
