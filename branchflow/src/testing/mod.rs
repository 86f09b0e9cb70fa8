//! Testing utilities for workflow runs.
//!
//! This module provides:
//! - An in-memory artifact store with fault injection
//! - A runner fixture wired to a fixed clock and a collecting sink
//! - Assertions over workflow outcomes

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{
    assert_artifact_contains, assert_evaluation, assert_task_names, assert_tasks_status,
};
pub use fixtures::{TestRunner, FIXTURE_START};
pub use mocks::MemoryArtifactStore;
