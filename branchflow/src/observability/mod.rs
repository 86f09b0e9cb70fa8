//! Tracing subscriber setup.
//!
//! Call [`init_tracing`] once at program start. Journal lines from workflow
//! runs reach the console through this subscriber.

mod subscriber;

pub use subscriber::{default_directive, init_tracing, LOG_ENV};
