//! Timestamp utilities and the injectable clock.
//!
//! Every timestamp written by branchflow uses local wall-clock time in the
//! `YYYY-MM-DD HH:MM:SS` form. Code that needs "now" asks a [`Clock`] so
//! tests can pin time.

use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;
use thiserror::Error;

/// Format used for every timestamp in artifacts and journals.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time without an attached offset.
pub type Timestamp = NaiveDateTime;

/// Errors that can occur during timestamp parsing.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The timestamp string is empty.
    #[error("Empty timestamp string")]
    EmptyString,

    /// The timestamp value is invalid.
    #[error("Invalid timestamp: {0}")]
    InvalidFormat(String),
}

/// A source of the current local time.
pub trait Clock: Send + Sync {
    /// Returns the current local time.
    fn now(&self) -> Timestamp;

    /// Returns the current local time formatted as `YYYY-MM-DD HH:MM:SS`.
    fn timestamp(&self) -> String {
        format_timestamp(&self.now())
    }
}

/// The system wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().naive_local()
    }
}

/// A clock pinned to a fixed instant, optionally advancing on every read.
#[derive(Debug)]
pub struct FixedClock {
    current: Mutex<Timestamp>,
    step: Duration,
}

impl FixedClock {
    /// Creates a clock that always returns `at`.
    #[must_use]
    pub fn new(at: Timestamp) -> Self {
        Self {
            current: Mutex::new(at),
            step: Duration::zero(),
        }
    }

    /// Creates a clock from a `YYYY-MM-DD HH:MM:SS` string.
    pub fn parse(at: &str) -> Result<Self, TimestampError> {
        parse_timestamp(at).map(Self::new)
    }

    /// Advances the clock by `seconds` after every read.
    #[must_use]
    pub fn with_step_seconds(mut self, seconds: i64) -> Self {
        self.step = Duration::seconds(seconds);
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        let mut current = self.current.lock();
        let now = *current;
        *current = now + self.step;
        now
    }
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Returns the current local time formatted as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn local_timestamp() -> String {
    SystemClock.timestamp()
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp.
///
/// An ISO-style `T` separator is accepted as well.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, TimestampError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(TimestampError::EmptyString);
    }

    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| TimestampError::InvalidFormat(trimmed.to_string()))
}
