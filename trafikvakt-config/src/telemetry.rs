//! Observability and monitoring configuration.
//!
//! Parameters for system instrumentation:
//! - Log filtering
//! - Metrics export

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

/// Telemetry configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct TelemetryConfig {
    /// Default tracing filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Enable the Prometheus metrics recorder.
    #[serde(default = "default_true")]
    pub prometheus: bool,
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            prometheus: default_true(),
        }
    }
}
