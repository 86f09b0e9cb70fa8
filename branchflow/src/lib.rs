//! # Branchflow
//!
//! Grade evaluation and a conditional workflow runner that records its
//! progress in an append-only text artifact.
//!
//! Branchflow provides:
//!
//! - **Grading**: mean of a non-empty score set mapped to `A`, `B`, `C` or `Fail`
//! - **Conditional workflows**: record which branch a condition took, then run
//!   a fixed sequence of simulated connectivity tasks
//! - **Append-only artifacts**: created once with a header, never truncated
//! - **Injectable time and events**: deterministic runs under test
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use branchflow::prelude::*;
//!
//! let result = evaluate(&[95.0, 88.0, 92.0])?;
//! assert_eq!(result.grade, Grade::A);
//!
//! let runner = ConditionalWorkflowRunner::new(
//!     WorkflowConfig::new().with_artifact_path("detailed_output.txt"),
//! );
//! let outcome = runner.run(true, Some("User authentication check"), None);
//! assert!(outcome.is_some());
//! # Ok::<(), BranchflowError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod artifact;
pub mod config;
pub mod core;
pub mod demo;
pub mod errors;
pub mod events;
pub mod grading;
pub mod observability;
pub mod testing;
pub mod utils;
pub mod workflow;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::artifact::{ArtifactStore, BlockRenderer, FileArtifactStore};
    pub use crate::config::WorkflowConfig;
    pub use crate::core::{
        ConnectionStatus, ConnectivitySnapshot, Evaluation, TaskRecord, TaskStatus,
        WorkflowOutcome, WorkflowRecord,
    };
    pub use crate::errors::{BranchflowError, Result};
    pub use crate::events::{EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::grading::{evaluate, parse_scores, Grade, GradeResult, ScoreSet};
    pub use crate::utils::{Clock, FixedClock, SystemClock};
    pub use crate::workflow::{ConditionalWorkflowRunner, ConnectivityTask};
}
