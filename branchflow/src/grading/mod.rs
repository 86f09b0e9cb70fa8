//! Grade evaluation.
//!
//! A [`ScoreSet`] is a non-empty ordered list of scores. Evaluating it yields
//! the arithmetic mean and the letter grade that mean falls into.

mod evaluator;
mod scores;

pub use evaluator::{evaluate, Grade, GradeResult};
pub use scores::{parse_scores, ScoreSet};
