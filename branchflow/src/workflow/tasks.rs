//! The fixed connectivity task sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A simulated connectivity task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityTask {
    /// Records the connectivity snapshot. Always runs.
    SaveConnectivityInfo,
    /// Records the caller's payload. Runs only when a payload is present.
    ProcessAdditionalData,
    /// Closes the sequence. Always runs last.
    FinalizeConnection,
}

impl ConnectivityTask {
    /// Returns the task name written to the artifact.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::SaveConnectivityInfo => "save_connectivity_info",
            Self::ProcessAdditionalData => "process_additional_data",
            Self::FinalizeConnection => "finalize_connection",
        }
    }

    /// Returns the tasks to run, in order.
    #[must_use]
    pub fn plan(with_payload: bool) -> Vec<Self> {
        let mut tasks = vec![Self::SaveConnectivityInfo];
        if with_payload {
            tasks.push(Self::ProcessAdditionalData);
        }
        tasks.push(Self::FinalizeConnection);
        tasks
    }
}

impl fmt::Display for ConnectivityTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `payload` carries data.
///
/// `null`, `false`, zero, empty objects, empty arrays and empty strings
/// count as absent.
#[must_use]
pub fn has_payload(payload: Option<&serde_json::Value>) -> bool {
    match payload {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(flag)) => *flag,
        Some(serde_json::Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
        Some(serde_json::Value::Object(map)) => !map.is_empty(),
        Some(serde_json::Value::Array(items)) => !items.is_empty(),
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
