//! Per-run journal of human-readable progress lines.

use crate::errors::BranchflowError;
use crate::events::EventSink;
use crate::utils::Clock;

/// Collects the progress lines of a single run and forwards each one to an
/// [`EventSink`].
///
/// Lines are formatted as `[<timestamp>] <message>`.
pub struct RunJournal<'a> {
    clock: &'a dyn Clock,
    sink: &'a dyn EventSink,
    entries: Vec<String>,
    warnings: Vec<String>,
}

impl<'a> RunJournal<'a> {
    /// Creates an empty journal.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, sink: &'a dyn EventSink) -> Self {
        Self {
            clock,
            sink,
            entries: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Records a progress line.
    pub fn record(
        &mut self,
        event_type: &str,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) {
        let message = message.into();
        let line = format!("[{}] {message}", self.clock.timestamp());
        self.entries.push(line);
        self.sink.emit(event_type, &message, data);
    }

    /// Records a non-fatal failure. The line lands in both the journal and
    /// the warning list, and is emitted once to the sink.
    pub fn warn(&mut self, event_type: &str, context: &str, error: &BranchflowError) {
        let message = format!("{context}: {error}");
        self.warnings.push(message.clone());
        self.record(event_type, message, Some(serde_json::json!(error.to_dict())));
    }

    /// Number of lines recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the journal, returning `(entries, warnings)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.entries, self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CollectingEventSink;
    use crate::utils::FixedClock;
    use std::io;

    #[test]
    fn test_record_formats_lines() {
        let clock = FixedClock::parse("2024-05-01 08:00:00").unwrap();
        let sink = CollectingEventSink::new();
        let mut journal = RunJournal::new(&clock, &sink);

        journal.record("workflow.started", "Starting", None);
        assert_eq!(journal.len(), 1);
        assert_eq!(sink.event_types(), vec!["workflow.started"]);

        let (entries, warnings) = journal.into_parts();
        assert_eq!(entries, vec!["[2024-05-01 08:00:00] Starting"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_warn_records_warning() {
        let clock = FixedClock::parse("2024-05-01 08:00:00").unwrap();
        let sink = CollectingEventSink::new();
        let mut journal = RunJournal::new(&clock, &sink);

        let err = BranchflowError::artifact_append(
            "out.txt",
            io::Error::new(io::ErrorKind::Other, "full"),
        );
        journal.warn(
            "artifact.append_failed",
            "Error writing if-else result to file",
            &err,
        );

        let (entries, warnings) = journal.into_parts();
        assert_eq!(entries.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Error writing if-else result to file: "));
        assert!(warnings[0].contains("full"));

        assert_eq!(sink.len(), 1);
        let event = &sink.events()[0];
        assert_eq!(event.data.as_ref().unwrap()["type"], "ArtifactIOError");
    }
}
