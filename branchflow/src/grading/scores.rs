//! Score sets and parsing them from user input.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::evaluator::{evaluate, GradeResult};
use crate::errors::{BranchflowError, Result};

/// An ordered, non-empty sequence of scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSet {
    scores: Vec<f64>,
}

impl ScoreSet {
    /// Creates a score set.
    ///
    /// # Errors
    ///
    /// Returns [`BranchflowError::InvalidInput`] when `scores` is empty.
    pub fn new(scores: Vec<f64>) -> Result<Self> {
        if scores.is_empty() {
            return Err(BranchflowError::invalid_input("score set is empty"));
        }
        Ok(Self { scores })
    }

    /// Returns the scores in input order.
    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Returns the number of scores. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Always false: a score set is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Evaluates the set.
    pub fn evaluate(&self) -> Result<GradeResult> {
        evaluate(&self.scores)
    }
}

impl TryFrom<Vec<f64>> for ScoreSet {
    type Error = BranchflowError;

    fn try_from(scores: Vec<f64>) -> Result<Self> {
        Self::new(scores)
    }
}

#[allow(clippy::expect_used)]
fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[,\s]+").expect("separator pattern is valid"))
}

/// Parses scores separated by commas and/or whitespace, e.g. `"95, 88 92"`.
///
/// # Errors
///
/// Returns [`BranchflowError::InvalidInput`] when a token is not a finite
/// number or when the input holds no scores at all.
pub fn parse_scores(input: &str) -> Result<ScoreSet> {
    let scores = separator()
        .split(input.trim())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(BranchflowError::invalid_input(format!(
                "'{token}' is not a valid score"
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    ScoreSet::new(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::Grade;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_commas_and_spaces() {
        let set = parse_scores("95, 88 92").unwrap();
        assert_eq!(set.scores(), &[95.0, 88.0, 92.0]);
    }

    #[test]
    fn test_parse_decimals_and_padding() {
        let set = parse_scores("  49.5,\t50.5\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.evaluate().unwrap().grade, Grade::C);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_scores("   "),
            Err(BranchflowError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_scores(" , ,"),
            Err(BranchflowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_scores("90, ninety").unwrap_err();
        assert!(err.to_string().contains("'ninety' is not a valid score"));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_scores("inf").is_err());
        assert!(parse_scores("NaN 10").is_err());
    }

    #[test]
    fn test_score_set_rejects_empty() {
        assert!(ScoreSet::new(Vec::new()).is_err());
        assert!(ScoreSet::try_from(vec![1.0]).is_ok());
    }
}
