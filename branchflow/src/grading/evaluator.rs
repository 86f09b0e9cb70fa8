//! Mean computation and letter grade mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BranchflowError, Result};

/// A letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Average of 90 or more.
    A,
    /// Average of 75 up to 90.
    B,
    /// Average of 50 up to 75.
    C,
    /// Average below 50.
    Fail,
}

impl Grade {
    /// Lower bound (inclusive) of each passing grade, checked top-down.
    const THRESHOLDS: [(f64, Self); 3] = [(90.0, Self::A), (75.0, Self::B), (50.0, Self::C)];

    /// Maps an average to its grade. The first threshold the average reaches
    /// wins; anything else, including `NaN`, is a fail.
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(lower, _)| average >= *lower)
            .map_or(Self::Fail, |(_, grade)| *grade)
    }

    /// Returns true for every grade except [`Grade::Fail`].
    #[must_use]
    pub fn is_passing(&self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// The outcome of evaluating a score set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Arithmetic mean of the scores.
    pub average: f64,
    /// Grade the average maps to.
    pub grade: Grade,
}

/// Computes the mean of `scores` and maps it to a grade.
///
/// # Errors
///
/// Returns [`BranchflowError::InvalidInput`] when `scores` is empty.
///
/// # Examples
///
/// ```
/// use branchflow::grading::{evaluate, Grade};
///
/// let result = evaluate(&[95.0, 88.0, 92.0]).unwrap();
/// assert_eq!(result.grade, Grade::A);
/// assert!(evaluate(&[]).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn evaluate(scores: &[f64]) -> Result<GradeResult> {
    if scores.is_empty() {
        return Err(BranchflowError::invalid_input(
            "cannot evaluate an empty score set",
        ));
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;

    Ok(GradeResult {
        average,
        grade: Grade::from_average(average),
    })
}
