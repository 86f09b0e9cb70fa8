//! Runner fixture for workflow tests.

use std::sync::Arc;

use super::MemoryArtifactStore;
use crate::artifact::ArtifactStore;
use crate::config::WorkflowConfig;
use crate::events::CollectingEventSink;
use crate::utils::FixedClock;
use crate::workflow::ConditionalWorkflowRunner;

/// Start time of every [`TestRunner`] clock.
pub const FIXTURE_START: &str = "2024-01-15 10:30:00";

/// A runner wired to an in-memory store, a stepping fixed clock and a
/// collecting sink, with handles kept for inspection.
pub struct TestRunner {
    /// The runner under test.
    pub runner: ConditionalWorkflowRunner,
    /// The store the runner writes to.
    pub store: Arc<MemoryArtifactStore>,
    /// The sink receiving the runner's events.
    pub sink: Arc<CollectingEventSink>,
}

impl TestRunner {
    /// Creates a fixture around an absent artifact.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(MemoryArtifactStore::new("memory_output.txt"))
    }

    /// Creates a fixture around `store`.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_store(store: MemoryArtifactStore) -> Self {
        let store = Arc::new(store);
        let sink = Arc::new(CollectingEventSink::new());
        let clock = FixedClock::parse(FIXTURE_START)
            .expect("fixture start is a valid timestamp")
            .with_step_seconds(1);

        let runner = ConditionalWorkflowRunner::new(
            WorkflowConfig::new().with_artifact_path(store.path().to_path_buf()),
        )
        .with_store(store.clone())
        .with_clock(Arc::new(clock))
        .with_sink(sink.clone());

        Self {
            runner,
            store,
            sink,
        }
    }

    /// Returns the artifact content, or an empty string if absent.
    #[must_use]
    pub fn artifact(&self) -> String {
        self.store.content().unwrap_or_default()
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}
