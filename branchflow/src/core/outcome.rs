//! Aggregate result of a workflow run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::{ConnectionStatus, ConnectivitySnapshot, TaskRecord, TaskStatus, WorkflowRecord};

/// Everything a completed run produced.
///
/// Only returned when the artifact was available; an aborted run yields no
/// outcome at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowOutcome {
    /// Unique identifier of the run.
    pub run_id: Uuid,
    /// Overall status.
    pub overall_status: ConnectionStatus,
    /// Timestamp of the connectivity snapshot.
    pub timestamp: String,
    /// The condition record.
    pub condition: WorkflowRecord,
    /// Task records in execution order.
    pub tasks: Vec<TaskRecord>,
    /// Snapshot taken before the tasks ran.
    pub connectivity: ConnectivitySnapshot,
    /// Path of the artifact.
    pub artifact_path: String,
    /// Whether this run created the artifact.
    pub created_artifact: bool,
    /// Non-fatal problems met during the run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Journal lines in the order they were emitted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub journal: Vec<String>,
}

impl WorkflowOutcome {
    /// Returns the names of the tasks that ran, in order.
    #[must_use]
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.task_name.as_str()).collect()
    }

    /// Returns the task record with the given name.
    #[must_use]
    pub fn task(&self, name: &str) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.task_name == name)
    }

    /// Returns true if every record reached the artifact.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.tasks.iter().all(|t| t.status.is_success())
    }

    /// Counts tasks per status.
    #[must_use]
    pub fn status_counts(&self) -> HashMap<TaskStatus, usize> {
        let mut counts = HashMap::new();
        for task in &self.tasks {
            *counts.entry(task.status).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(tasks: Vec<TaskRecord>, warnings: Vec<String>) -> WorkflowOutcome {
        WorkflowOutcome {
            run_id: Uuid::new_v4(),
            overall_status: ConnectionStatus::Connected,
            timestamp: "2024-01-01 00:00:00".to_string(),
            condition: WorkflowRecord::new(true, None, "2024-01-01 00:00:00"),
            tasks,
            connectivity: ConnectivitySnapshot {
                status: ConnectionStatus::Connected,
                timestamp: "2024-01-01 00:00:00".to_string(),
                artifact_path: "out.txt".to_string(),
                artifact_exists: true,
                additional_data: serde_json::json!({}),
                journal_entries: 0,
            },
            artifact_path: "out.txt".to_string(),
            created_artifact: false,
            warnings,
            journal: Vec::new(),
        }
    }

    fn task(name: &str) -> TaskRecord {
        TaskRecord::new(name, serde_json::json!({}), "t", "out.txt", true)
    }

    #[test]
    fn test_task_lookup() {
        let out = outcome(vec![task("a"), task("b")], Vec::new());
        assert_eq!(out.task_names(), vec!["a", "b"]);
        assert!(out.task("b").is_some());
        assert!(out.task("c").is_none());
        assert!(out.is_clean());
    }

    #[test]
    fn test_status_counts_and_clean() {
        let out = outcome(
            vec![task("a"), task("b").failed()],
            vec!["append failed".to_string()],
        );
        let counts = out.status_counts();
        assert_eq!(counts.get(&TaskStatus::Success), Some(&1));
        assert_eq!(counts.get(&TaskStatus::Failure), Some(&1));
        assert!(!out.is_clean());
    }

    #[test]
    fn test_outcome_serializes_overall_status() {
        let out = outcome(vec![task("a")], Vec::new());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["overall_status"], "connected");
        assert!(json.get("warnings").is_none());
    }
}
