//! The conditional workflow runner.
//!
//! A run makes sure the artifact exists, records which branch a condition
//! took and then walks a fixed list of simulated connectivity tasks, each of
//! which appends its own record. Only a failure to create the artifact stops
//! a run; every later write failure becomes a warning.

mod journal;
mod runner;
mod tasks;

pub use journal::RunJournal;
pub use runner::ConditionalWorkflowRunner;
pub use tasks::{has_payload, ConnectivityTask};
