//! Utility functions for run identifiers and timestamp handling.

pub mod timestamps;

pub use timestamps::{
    format_timestamp, local_timestamp, parse_timestamp, Clock, FixedClock, SystemClock,
    Timestamp, TimestampError, TIMESTAMP_FORMAT,
};

/// Generates a random (v4) UUID for identifying a workflow run.
#[must_use]
pub fn generate_run_id() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}
