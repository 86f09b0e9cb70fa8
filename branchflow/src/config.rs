//! Configuration for the workflow runner.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{BranchflowError, Result};

/// Configuration for a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Path of the append-only artifact.
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,
    /// Width of the `=` line written under the artifact header.
    #[serde(default = "default_header_rule_width")]
    pub header_rule_width: usize,
    /// Width of the `-` line closing each task block.
    #[serde(default = "default_task_rule_width")]
    pub task_rule_width: usize,
    /// Indentation of pretty-printed task payloads.
    #[serde(default = "default_payload_indent")]
    pub payload_indent: usize,
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("detailed_output.txt")
}

fn default_header_rule_width() -> usize {
    50
}

fn default_task_rule_width() -> usize {
    30
}

fn default_payload_indent() -> usize {
    2
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
            header_rule_width: default_header_rule_width(),
            task_rule_width: default_task_rule_width(),
            payload_indent: default_payload_indent(),
        }
    }
}

impl WorkflowConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the artifact path.
    #[must_use]
    pub fn with_artifact_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.artifact_path = path.into();
        self
    }

    /// Sets the header rule width.
    #[must_use]
    pub fn with_header_rule_width(mut self, width: usize) -> Self {
        self.header_rule_width = width;
        self
    }

    /// Sets the task rule width.
    #[must_use]
    pub fn with_task_rule_width(mut self, width: usize) -> Self {
        self.task_rule_width = width;
        self
    }

    /// Sets the payload indentation.
    #[must_use]
    pub fn with_payload_indent(mut self, indent: usize) -> Self {
        self.payload_indent = indent;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BranchflowError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WorkflowConfig::new();
        assert_eq!(config.artifact_path, PathBuf::from("detailed_output.txt"));
        assert_eq!(config.header_rule_width, 50);
        assert_eq!(config.task_rule_width, 30);
        assert_eq!(config.payload_indent, 2);
    }

    #[test]
    fn test_builders() {
        let config = WorkflowConfig::new()
            .with_artifact_path("other.txt")
            .with_header_rule_width(10)
            .with_task_rule_width(5)
            .with_payload_indent(4);
        assert_eq!(config.artifact_path, PathBuf::from("other.txt"));
        assert_eq!(config.header_rule_width, 10);
        assert_eq!(config.task_rule_width, 5);
        assert_eq!(config.payload_indent, 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WorkflowConfig::from_json(r#"{"artifact_path": "run.log"}"#).unwrap();
        assert_eq!(config.artifact_path, PathBuf::from("run.log"));
        assert_eq!(config.header_rule_width, 50);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            WorkflowConfig::from_json("{not json"),
            Err(BranchflowError::Serialization(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"task_rule_width": 12}}"#).unwrap();

        let config = WorkflowConfig::from_file(file.path()).unwrap();
        assert_eq!(config.task_rule_width, 12);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WorkflowConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, BranchflowError::Config(_)));
    }
}
