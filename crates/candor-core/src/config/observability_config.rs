use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive string, e.g. `candor=debug`.
    pub log_filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
