//! Event sink trait and implementations.

use parking_lot::RwLock;
use tracing::{debug, info, warn, Level};

/// Trait for event sinks that receive workflow events.
///
/// Emission never fails; sinks that can fail internally must swallow
/// their own errors.
pub trait EventSink: Send + Sync {
    /// Emits an event.
    ///
    /// # Arguments
    ///
    /// * `event_type` - The type of event (e.g., "task.completed")
    /// * `message` - Human-readable description
    /// * `data` - Optional structured event data
    fn emit(&self, event_type: &str, message: &str, data: Option<serde_json::Value>);
}

/// A no-op event sink that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventSink;

impl EventSink for NoOpEventSink {
    fn emit(&self, _event_type: &str, _message: &str, _data: Option<serde_json::Value>) {}
}

/// An event sink that logs events using the tracing framework.
#[derive(Debug, Clone)]
pub struct LoggingEventSink {
    level: Level,
}

impl Default for LoggingEventSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingEventSink {
    /// Creates a new logging event sink with the specified level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    /// Creates an info-level logging sink.
    #[must_use]
    pub fn info() -> Self {
        Self::new(Level::INFO)
    }
}

/// Returns true for event types that report a failure.
fn is_failure(event_type: &str) -> bool {
    event_type.ends_with("_failed") || event_type.ends_with(".aborted")
}

impl EventSink for LoggingEventSink {
    /// Failure events are always logged at warn level, whatever the sink's
    /// configured level.
    fn emit(&self, event_type: &str, message: &str, data: Option<serde_json::Value>) {
        if is_failure(event_type) {
            warn!(event_type = %event_type, event_data = ?data, "{}", message);
        } else if self.level == Level::DEBUG {
            debug!(event_type = %event_type, event_data = ?data, "{}", message);
        } else {
            info!(event_type = %event_type, event_data = ?data, "{}", message);
        }
    }
}

/// A single event captured by [`CollectingEventSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedEvent {
    /// Event type.
    pub event_type: String,
    /// Event message.
    pub message: String,
    /// Event data.
    pub data: Option<serde_json::Value>,
}

/// A collecting event sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: RwLock<Vec<CollectedEvent>>,
}

impl CollectingEventSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    #[must_use]
    pub fn events(&self) -> Vec<CollectedEvent> {
        self.events.read().clone()
    }

    /// Returns the collected event types in order.
    #[must_use]
    pub fn event_types(&self) -> Vec<String> {
        self.events
            .read()
            .iter()
            .map(|e| e.event_type.clone())
            .collect()
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Clears all collected events.
    pub fn clear(&self) {
        self.events.write().clear();
    }

    /// Returns events matching a type prefix.
    #[must_use]
    pub fn events_of_type(&self, type_prefix: &str) -> Vec<CollectedEvent> {
        self.events
            .read()
            .iter()
            .filter(|e| e.event_type.starts_with(type_prefix))
            .cloned()
            .collect()
    }
}

impl EventSink for CollectingEventSink {
    fn emit(&self, event_type: &str, message: &str, data: Option<serde_json::Value>) {
        self.events.write().push(CollectedEvent {
            event_type: event_type.to_string(),
            message: message.to_string(),
            data,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpEventSink;
        sink.emit("test", "nothing", Some(serde_json::json!({"x": 1})));
    }

    #[test]
    fn test_logging_sink() {
        LoggingEventSink::default().emit("test.event", "hello", None);
        LoggingEventSink::debug().emit(
            "test.event",
            "hello",
            Some(serde_json::json!({"key": "value"})),
        );
    }

    #[test]
    fn test_failure_events() {
        assert!(is_failure("artifact.append_failed"));
        assert!(is_failure("artifact.create_failed"));
        assert!(is_failure("workflow.aborted"));
        assert!(!is_failure("task.completed"));
        assert!(!is_failure("workflow.started"));

        LoggingEventSink::debug().emit("artifact.append_failed", "disk full", None);
    }

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingEventSink::new();
        assert!(sink.is_empty());

        sink.emit("event1", "first", None);
        sink.emit("event2", "second", Some(serde_json::json!({"data": true})));

        assert_eq!(sink.len(), 2);

        let events = sink.events();
        assert_eq!(events[0].event_type, "event1");
        assert_eq!(events[1].message, "second");
        assert_eq!(sink.event_types(), vec!["event1", "event2"]);
    }

    #[test]
    fn test_collecting_sink_filter() {
        let sink = CollectingEventSink::new();
        sink.emit("task.started", "", None);
        sink.emit("task.completed", "", None);
        sink.emit("condition.evaluated", "", None);

        assert_eq!(sink.events_of_type("task.").len(), 2);
        assert_eq!(sink.events_of_type("condition.").len(), 1);
    }

    #[test]
    fn test_collecting_sink_clear() {
        let sink = CollectingEventSink::new();
        sink.emit("event", "", None);
        assert_eq!(sink.len(), 1);

        sink.clear();
        assert!(sink.is_empty());
    }
}
