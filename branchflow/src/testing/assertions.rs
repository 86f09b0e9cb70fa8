//! Test assertions for workflow outcomes.

use crate::core::{Evaluation, TaskStatus, WorkflowOutcome};

/// Asserts that the condition record carries the expected evaluation.
pub fn assert_evaluation(outcome: &WorkflowOutcome, expected: Evaluation) {
    assert_eq!(
        outcome.condition.evaluation, expected,
        "Expected evaluation {:?}, got {:?}",
        expected, outcome.condition.evaluation
    );
}

/// Asserts that the tasks ran with exactly these names, in order.
pub fn assert_task_names(outcome: &WorkflowOutcome, expected: &[&str]) {
    assert_eq!(
        outcome.task_names(),
        expected,
        "Unexpected task sequence"
    );
}

/// Asserts that every task ended with `expected`.
pub fn assert_tasks_status(outcome: &WorkflowOutcome, expected: TaskStatus) {
    for task in &outcome.tasks {
        assert_eq!(
            task.status, expected,
            "Task '{}' has status {:?}, expected {:?}",
            task.task_name, task.status, expected
        );
    }
}

/// Asserts that the artifact text contains `needle`.
pub fn assert_artifact_contains(artifact: &str, needle: &str) {
    assert!(
        artifact.contains(needle),
        "Expected artifact to contain {needle:?}, artifact was:\n{artifact}"
    );
}
