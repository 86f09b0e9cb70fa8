//! Records appended to the workflow artifact.

use serde::{Deserialize, Serialize};

use super::{ConnectionStatus, Evaluation, TaskStatus};

/// The record of which branch a condition took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    /// The branch taken.
    pub evaluation: Evaluation,
    /// Human-readable message, including the caller's context if any.
    pub message: String,
    /// Whether the condition held.
    pub condition_met: bool,
    /// When the condition was evaluated.
    pub timestamp: String,
}

impl WorkflowRecord {
    /// Builds the record for `condition`. A non-empty `context` is appended
    /// to the message in parentheses, verbatim.
    #[must_use]
    pub fn new(condition: bool, context: Option<&str>, timestamp: impl Into<String>) -> Self {
        let evaluation = Evaluation::from_condition(condition);
        let message = match context.filter(|c| !c.is_empty()) {
            Some(context) => format!("{} ({context})", evaluation.describe()),
            None => evaluation.describe().to_string(),
        };

        Self {
            evaluation,
            message,
            condition_met: evaluation.condition_met(),
            timestamp: timestamp.into(),
        }
    }
}

/// The record of one connectivity task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Name of the task.
    #[serde(rename = "task")]
    pub task_name: String,
    /// Whether the record reached the artifact.
    pub status: TaskStatus,
    /// Data the task processed.
    #[serde(rename = "processed_data")]
    pub payload: serde_json::Value,
    /// When the task ran.
    pub timestamp: String,
    /// Artifact the task wrote to.
    pub artifact_path: String,
    /// Whether the artifact existed when the task ran.
    pub artifact_exists: bool,
}

impl TaskRecord {
    /// Creates a successful task record.
    #[must_use]
    pub fn new(
        task_name: impl Into<String>,
        payload: serde_json::Value,
        timestamp: impl Into<String>,
        artifact_path: impl Into<String>,
        artifact_exists: bool,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            status: TaskStatus::Success,
            payload,
            timestamp: timestamp.into(),
            artifact_path: artifact_path.into(),
            artifact_exists,
        }
    }

    /// Marks the record as failed.
    #[must_use]
    pub fn failed(mut self) -> Self {
        self.status = TaskStatus::Failure;
        self
    }
}

/// In-memory view of the run taken before the connectivity tasks start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivitySnapshot {
    /// Connection status.
    pub status: ConnectionStatus,
    /// When the snapshot was taken.
    pub timestamp: String,
    /// Path of the artifact.
    pub artifact_path: String,
    /// Whether the artifact existed at snapshot time.
    pub artifact_exists: bool,
    /// Caller-supplied payload, or an empty object.
    pub additional_data: serde_json::Value,
    /// Number of journal entries recorded so far in this run.
    pub journal_entries: usize,
}
