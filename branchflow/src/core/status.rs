//! Branch evaluation and task status enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which branch a condition selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// The condition held; the if block ran.
    ConditionTrue,
    /// The condition did not hold; the else block ran.
    ConditionFalse,
}

impl Evaluation {
    /// Maps a boolean condition to its evaluation.
    #[must_use]
    pub fn from_condition(condition: bool) -> Self {
        if condition {
            Self::ConditionTrue
        } else {
            Self::ConditionFalse
        }
    }

    /// Returns true if the condition held.
    #[must_use]
    pub fn condition_met(&self) -> bool {
        matches!(self, Self::ConditionTrue)
    }

    /// Human-readable description of the branch taken.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::ConditionTrue => "Condition is True - executing if block",
            Self::ConditionFalse => "Condition is False - executing else block",
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConditionTrue => write!(f, "condition_true"),
            Self::ConditionFalse => write!(f, "condition_false"),
        }
    }
}

/// Outcome of a single connectivity task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task ran and its record reached the artifact.
    Success,
    /// The task ran but its record could not be appended.
    Failure,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Success
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

impl TaskStatus {
    /// Returns true if the status indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Overall status of a completed workflow run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// The artifact was available and the task sequence ran.
    Connected,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected => write!(f, "connected"),
        }
    }
}
