//! Arithmetic quiz logic.
//!
//! Each round shows `a + b` and nine numbers in a 3x3 grid; picking the sum
//! scores a point, anything else loses one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod problem;
mod quiz;

pub use problem::{CHOICES, Difficulty, Problem};
pub use quiz::{Answer, Quiz, QuizError};
