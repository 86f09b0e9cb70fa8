//! Global subscriber initialisation.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a branchflow-specific filter directive.
pub const LOG_ENV: &str = "BRANCHFLOW_LOG";

/// Builds the filter used when neither [`LOG_ENV`] nor `RUST_LOG` is set.
///
/// Branchflow's own events (journal lines included) log at `level`, and
/// everything else only at warn.
#[must_use]
pub fn default_directive(level: Level) -> String {
    format!("warn,branchflow={}", level.as_str().to_ascii_lowercase())
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Installs the global tracing subscriber.
///
/// * `json` - emit newline-delimited JSON instead of human-readable lines.
/// * `level` - branchflow verbosity when no filter is set in the environment.
///
/// [`LOG_ENV`] wins over `RUST_LOG`. Only the first call in a process takes
/// effect; later calls are ignored.
pub fn init_tracing(json: bool, level: Level) {
    let registry = tracing_subscriber::registry().with(env_filter(level));
    let installed = if json {
        registry
            .with(fmt::layer().with_target(false).json().flatten_event(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(false).compact()).try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
