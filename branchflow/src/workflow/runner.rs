//! The conditional workflow runner.

use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tracing::info_span;

use super::journal::RunJournal;
use super::tasks::{has_payload, ConnectivityTask};
use crate::artifact::{ArtifactStore, BlockRenderer, FileArtifactStore};
use crate::config::WorkflowConfig;
use crate::core::{
    ConnectionStatus, ConnectivitySnapshot, TaskRecord, WorkflowOutcome, WorkflowRecord,
};
use crate::errors::Result;
use crate::events::{EventSink, LoggingEventSink};
use crate::utils::{generate_run_id, Clock, SystemClock};

/// Runs the if-else workflow against a single artifact.
///
/// # Example
///
/// ```rust,no_run
/// use branchflow::config::WorkflowConfig;
/// use branchflow::workflow::ConditionalWorkflowRunner;
///
/// let runner = ConditionalWorkflowRunner::new(
///     WorkflowConfig::new().with_artifact_path("demo_output.txt"),
/// );
/// let payload = serde_json::json!({"user_id": 12345});
/// let outcome = runner.run(true, Some("User authentication check"), Some(&payload));
/// assert_eq!(outcome.unwrap().tasks.len(), 3);
/// ```
pub struct ConditionalWorkflowRunner {
    config: WorkflowConfig,
    renderer: BlockRenderer,
    store: Arc<dyn ArtifactStore>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
}

impl std::fmt::Debug for ConditionalWorkflowRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionalWorkflowRunner")
            .field("artifact_path", &self.store.path())
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}

impl ConditionalWorkflowRunner {
    /// Creates a runner writing to the file named in `config`, using the
    /// system clock and a tracing-backed event sink.
    #[must_use]
    pub fn new(config: WorkflowConfig) -> Self {
        let store = Arc::new(FileArtifactStore::new(config.artifact_path.clone()));
        Self {
            renderer: BlockRenderer::from_config(&config),
            config,
            store,
            clock: Arc::new(SystemClock),
            sink: Arc::new(LoggingEventSink::default()),
        }
    }

    /// Replaces the artifact store.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn ArtifactStore>) -> Self {
        self.store = store;
        self
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the runner's configuration.
    #[must_use]
    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    /// Returns the artifact path.
    #[must_use]
    pub fn artifact_path(&self) -> &Path {
        self.store.path()
    }

    /// Runs the workflow.
    ///
    /// Returns `None` when the artifact was absent and could not be created;
    /// the failure has already been logged.
    pub fn run(
        &self,
        condition: bool,
        context: Option<&str>,
        payload: Option<&serde_json::Value>,
    ) -> Option<WorkflowOutcome> {
        self.try_run(condition, context, payload).ok()
    }

    /// Runs the workflow, returning the fatal error instead of `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::BranchflowError::ArtifactIo`] when the
    /// artifact could not be created. Append failures never surface here.
    pub fn try_run(
        &self,
        condition: bool,
        context: Option<&str>,
        payload: Option<&serde_json::Value>,
    ) -> Result<WorkflowOutcome> {
        let run_id = generate_run_id();
        let span = info_span!("workflow_run", %run_id, artifact = %self.store.display_path());
        let _guard = span.enter();

        let mut journal = RunJournal::new(self.clock.as_ref(), self.sink.as_ref());
        journal.record(
            "workflow.started",
            "Starting detailed if-else processing...",
            Some(json!({"run_id": run_id, "condition": condition})),
        );

        let created_artifact = match self.ensure_artifact(&mut journal) {
            Ok(created) => created,
            Err(e) => {
                journal.record(
                    "workflow.aborted",
                    "Failed to create output file. Cannot proceed with processing.",
                    Some(json!(e.to_dict())),
                );
                return Err(e);
            }
        };

        let condition_record = self.evaluate_condition(condition, context, &mut journal);
        let (connectivity, tasks) = self.run_connectivity_tasks(payload, &mut journal);

        journal.record(
            "workflow.completed",
            "Detailed if-else processing completed successfully.",
            None,
        );
        journal.record(
            "workflow.status",
            format!("Final connectivity status: {}", ConnectionStatus::Connected),
            None,
        );

        let (journal, warnings) = journal.into_parts();
        Ok(WorkflowOutcome {
            run_id,
            overall_status: ConnectionStatus::Connected,
            timestamp: connectivity.timestamp.clone(),
            condition: condition_record,
            tasks,
            connectivity,
            artifact_path: self.store.display_path(),
            created_artifact,
            warnings,
            journal,
        })
    }

    /// Makes sure the artifact exists. Returns whether this call created it.
    fn ensure_artifact(&self, journal: &mut RunJournal<'_>) -> Result<bool> {
        let path = self.store.display_path();
        if self.check_artifact(journal) {
            journal.record("artifact.reused", format!("File already exists: {path}"), None);
            return Ok(false);
        }

        let header = self.renderer.header(&self.clock.timestamp());
        match self.store.create(&header) {
            Ok(true) => {
                journal.record("artifact.created", format!("Created new file: {path}"), None);
                Ok(true)
            }
            Ok(false) => {
                journal.record("artifact.reused", format!("File already exists: {path}"), None);
                Ok(false)
            }
            Err(e) => {
                journal.record(
                    "artifact.create_failed",
                    format!("Error creating file: {e}"),
                    None,
                );
                Err(e)
            }
        }
    }

    fn check_artifact(&self, journal: &mut RunJournal<'_>) -> bool {
        let exists = self.store.exists();
        journal.record(
            "artifact.checked",
            format!("File '{}' exists: {exists}", self.store.display_path()),
            Some(json!({"exists": exists})),
        );
        exists
    }

    fn evaluate_condition(
        &self,
        condition: bool,
        context: Option<&str>,
        journal: &mut RunJournal<'_>,
    ) -> WorkflowRecord {
        let record = WorkflowRecord::new(condition, context, self.clock.timestamp());
        journal.record(
            "condition.evaluated",
            record.message.clone(),
            Some(json!({"evaluation": record.evaluation})),
        );

        if let Err(e) = self.store.append(&self.renderer.condition_block(&record)) {
            journal.warn(
                "artifact.append_failed",
                "Error writing if-else result to file",
                &e,
            );
        }

        record
    }

    fn run_connectivity_tasks(
        &self,
        payload: Option<&serde_json::Value>,
        journal: &mut RunJournal<'_>,
    ) -> (ConnectivitySnapshot, Vec<TaskRecord>) {
        journal.record(
            "connectivity.started",
            "Starting connectivity handling after if-else block...",
            None,
        );

        let with_payload = has_payload(payload);
        let additional_data = match payload {
            Some(data) if with_payload => data.clone(),
            _ => json!({}),
        };

        let snapshot = ConnectivitySnapshot {
            status: ConnectionStatus::Connected,
            timestamp: self.clock.timestamp(),
            artifact_path: self.store.display_path(),
            artifact_exists: self.check_artifact(journal),
            additional_data,
            journal_entries: journal.len(),
        };

        let mut tasks: Vec<TaskRecord> = Vec::new();
        for task in ConnectivityTask::plan(with_payload) {
            let data = match task {
                ConnectivityTask::SaveConnectivityInfo => json!({"connectivity_data": snapshot}),
                ConnectivityTask::ProcessAdditionalData => {
                    json!({"additional_data": snapshot.additional_data})
                }
                ConnectivityTask::FinalizeConnection => {
                    json!({"final_status": "completed", "tasks_completed": tasks.len()})
                }
            };
            tasks.push(self.run_task(task, data, journal));
        }

        journal.record(
            "connectivity.completed",
            "Connectivity handling completed successfully.",
            Some(json!({"tasks": tasks.len()})),
        );

        (snapshot, tasks)
    }

    /// Runs one simulated task and appends its record.
    fn run_task(
        &self,
        task: ConnectivityTask,
        data: serde_json::Value,
        journal: &mut RunJournal<'_>,
    ) -> TaskRecord {
        journal.record(
            "task.started",
            format!("Starting connectivity task: {task}"),
            None,
        );

        let mut record = TaskRecord::new(
            task.name(),
            data,
            self.clock.timestamp(),
            self.store.display_path(),
            self.store.exists(),
        );

        let written = self
            .renderer
            .task_block(&record)
            .and_then(|block| self.store.append(&block));
        if let Err(e) = written {
            journal.warn(
                "artifact.append_failed",
                "Error writing connectivity task to file",
                &e,
            );
            record = record.failed();
        }

        journal.record(
            "task.completed",
            format!("Completed connectivity task: {task}"),
            Some(json!({"task": task, "status": record.status})),
        );
        record
    }
}
