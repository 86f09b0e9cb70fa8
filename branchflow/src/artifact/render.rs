//! Text rendering of artifact blocks.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::WorkflowConfig;
use crate::core::{TaskRecord, WorkflowRecord};
use crate::errors::Result;

/// Renders the header and blocks written to an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRenderer {
    header_rule_width: usize,
    task_rule_width: usize,
    payload_indent: usize,
}

impl Default for BlockRenderer {
    fn default() -> Self {
        Self::from_config(&WorkflowConfig::default())
    }
}

impl BlockRenderer {
    /// Creates a renderer using the widths from `config`.
    #[must_use]
    pub fn from_config(config: &WorkflowConfig) -> Self {
        Self {
            header_rule_width: config.header_rule_width,
            task_rule_width: config.task_rule_width,
            payload_indent: config.payload_indent,
        }
    }

    /// Header written when the artifact is created.
    #[must_use]
    pub fn header(&self, timestamp: &str) -> String {
        format!(
            "Output Log - Created: {timestamp}\n{}\n",
            "=".repeat(self.header_rule_width)
        )
    }

    /// Block recording a condition evaluation.
    #[must_use]
    pub fn condition_block(&self, record: &WorkflowRecord) -> String {
        format!(
            "\nIF-ELSE EVALUATION: {}\nTimestamp: {}\n",
            record.message, record.timestamp
        )
    }

    /// Block recording a connectivity task.
    pub fn task_block(&self, record: &TaskRecord) -> Result<String> {
        Ok(format!(
            "\nCONNECTIVITY TASK: {}\nStatus: {}\nTimestamp: {}\nProcessed Data: {}\n{}\n",
            record.task_name,
            record.status,
            record.timestamp,
            self.pretty_json(&record.payload)?,
            "-".repeat(self.task_rule_width)
        ))
    }

    fn pretty_json(&self, value: &serde_json::Value) -> Result<String> {
        let indent = vec![b' '; self.payload_indent];
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        value.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header() {
        let renderer = BlockRenderer::default();
        let header = renderer.header("2024-01-01 09:00:00");
        assert_eq!(
            header,
            format!("Output Log - Created: 2024-01-01 09:00:00\n{}\n", "=".repeat(50))
        );
    }

    #[test]
    fn test_condition_block() {
        let renderer = BlockRenderer::default();
        let record = WorkflowRecord::new(true, Some("Login"), "2024-01-01 09:00:01");
        assert_eq!(
            renderer.condition_block(&record),
            "\nIF-ELSE EVALUATION: Condition is True - executing if block (Login)\n\
             Timestamp: 2024-01-01 09:00:01\n"
        );
    }

    #[test]
    fn test_task_block() {
        let renderer = BlockRenderer::default();
        let record = TaskRecord::new(
            "finalize_connection",
            serde_json::json!({"final_status": "completed", "tasks_completed": 1}),
            "2024-01-01 09:00:02",
            "out.txt",
            true,
        );

        let expected = "\nCONNECTIVITY TASK: finalize_connection\n\
                        Status: success\n\
                        Timestamp: 2024-01-01 09:00:02\n\
                        Processed Data: {\n  \"final_status\": \"completed\",\n  \"tasks_completed\": 1\n}\n\
                        ------------------------------\n";
        assert_eq!(renderer.task_block(&record).unwrap(), expected);
    }

    #[test]
    fn test_custom_widths() {
        let config = WorkflowConfig::new()
            .with_header_rule_width(3)
            .with_task_rule_width(2)
            .with_payload_indent(4);
        let renderer = BlockRenderer::from_config(&config);

        assert!(renderer.header("t").ends_with("\n===\n"));

        let record = TaskRecord::new("t", serde_json::json!({"k": 1}), "t", "p", true);
        let block = renderer.task_block(&record).unwrap();
        assert!(block.contains("{\n    \"k\": 1\n}"));
        assert!(block.ends_with("\n--\n"));
    }
}
