//! Event sink system for observability.
//!
//! A workflow run reports each step to an [`EventSink`]. The default sink
//! forwards events to `tracing`; tests use [`CollectingEventSink`].

mod sink;

pub use sink::{CollectedEvent, CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
