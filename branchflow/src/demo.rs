//! Reference scenarios exercised by the `demo` command.

use serde_json::json;
use std::path::Path;
use std::sync::Arc;

use crate::config::WorkflowConfig;
use crate::core::WorkflowOutcome;
use crate::events::EventSink;
use crate::workflow::ConditionalWorkflowRunner;

/// One demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoScenario {
    /// Title printed before the run.
    pub title: &'static str,
    /// Artifact file name, relative to the demo directory.
    pub file_name: &'static str,
    /// Condition to evaluate.
    pub condition: bool,
    /// Context for the condition message.
    pub context: &'static str,
    /// Payload handed to the connectivity tasks.
    pub payload: Option<serde_json::Value>,
}

/// Returns the three reference scenarios.
#[must_use]
pub fn scenarios() -> Vec<DemoScenario> {
    vec![
        DemoScenario {
            title: "Condition is True with additional data",
            file_name: "demo_output_1.txt",
            condition: true,
            context: "User authentication check",
            payload: Some(json!({
                "user_id": 12345,
                "session_token": "abc123xyz",
                "permissions": ["read", "write"]
            })),
        },
        DemoScenario {
            title: "Condition is False without additional data",
            file_name: "demo_output_2.txt",
            condition: false,
            context: "Feature availability check",
            payload: None,
        },
        DemoScenario {
            title: "Complex condition with nested data",
            file_name: "demo_output_3.txt",
            condition: [1, 2, 3, 4, 5].len() > 3,
            context: "Data validation check",
            payload: Some(json!({
                "validation_rules": {
                    "min_length": 3,
                    "max_length": 10,
                    "required_fields": ["name", "email"]
                },
                "input_data": {
                    "name": "John Doe",
                    "email": "john@example.com",
                    "age": 30
                },
                "validation_result": "passed"
            })),
        },
    ]
}

/// Runs every scenario with artifacts under `dir`.
///
/// Each entry pairs the scenario with its outcome; `None` means the
/// scenario's artifact could not be created.
pub fn run_all(
    dir: &Path,
    base: &WorkflowConfig,
    sink: Arc<dyn EventSink>,
) -> Vec<(DemoScenario, Option<WorkflowOutcome>)> {
    scenarios()
        .into_iter()
        .map(|scenario| {
            let config = base
                .clone()
                .with_artifact_path(dir.join(scenario.file_name));
            let runner = ConditionalWorkflowRunner::new(config).with_sink(sink.clone());
            let outcome = runner.run(
                scenario.condition,
                Some(scenario.context),
                scenario.payload.as_ref(),
            );
            (scenario, outcome)
        })
        .collect()
}
