//! Core domain model types for branchflow.
//!
//! This module contains the records a workflow run produces:
//! - Branch evaluation and task status enums
//! - Condition and task records appended to the artifact
//! - The aggregate outcome returned to the caller

mod outcome;
mod record;
mod status;

pub use outcome::WorkflowOutcome;
pub use record::{ConnectivitySnapshot, TaskRecord, WorkflowRecord};
pub use status::{ConnectionStatus, Evaluation, TaskStatus};
