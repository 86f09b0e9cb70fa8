//! Error types for branchflow.
//!
//! Two kinds of failure matter to callers: invalid grading input, which is
//! always surfaced, and artifact I/O, which is fatal only while creating the
//! artifact. Everything else is plumbing.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BranchflowError>;

/// The artifact operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactOperation {
    /// Creating the artifact and writing its header.
    Create,
    /// Appending a block to an existing artifact.
    Append,
}

impl std::fmt::Display for ArtifactOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Append => write!(f, "append"),
        }
    }
}

/// The main error type for branchflow operations.
#[derive(Debug, Error)]
pub enum BranchflowError {
    /// The grade evaluator received input it cannot evaluate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Creating or appending to the workflow artifact failed.
    #[error("Failed to {operation} artifact '{}': {source}", .path.display())]
    ArtifactIo {
        /// Path of the artifact.
        path: PathBuf,
        /// What was being attempted.
        operation: ArtifactOperation,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BranchflowError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates an artifact creation error.
    #[must_use]
    pub fn artifact_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ArtifactIo {
            path: path.into(),
            operation: ArtifactOperation::Create,
            source,
        }
    }

    /// Creates an artifact append error.
    #[must_use]
    pub fn artifact_append(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ArtifactIo {
            path: path.into(),
            operation: ArtifactOperation::Append,
            source,
        }
    }

    /// Returns true if this error aborts a workflow run.
    ///
    /// Only a failed artifact creation is fatal; append failures degrade to
    /// warnings.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::ArtifactIo { operation, .. } => *operation == ArtifactOperation::Create,
            Self::InvalidInput(_) | Self::Serialization(_) | Self::Config(_) => true,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::InvalidInput(_) => {
                map.insert("type".to_string(), serde_json::json!("InvalidInputError"));
            }
            Self::ArtifactIo { path, operation, .. } => {
                map.insert("type".to_string(), serde_json::json!("ArtifactIOError"));
                map.insert(
                    "path".to_string(),
                    serde_json::json!(path.display().to_string()),
                );
                map.insert(
                    "operation".to_string(),
                    serde_json::json!(operation.to_string()),
                );
            }
            Self::Serialization(_) => {
                map.insert("type".to_string(), serde_json::json!("SerializationError"));
            }
            Self::Config(_) => {
                map.insert("type".to_string(), serde_json::json!("ConfigError"));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}
