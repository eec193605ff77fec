//! ## trafikvakt-telemetry::logging
//! **Structured logging bootstrap with `tracing`**
//!
//! Installs the process-wide `tracing` subscriber used by every
//! trafikvakt component. The registry core emits its own spans and
//! events through `tracing` directly; this module only owns the
//! subscriber setup and a helper for one-off registry events.

use tracing::info_span;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global fmt subscriber. Honors `RUST_LOG`, falling
    /// back to `info` when unset.
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_thread_names(true)
            .with_span_events(FmtSpan::ENTER)
            .init()
    }

    /// Emits one structured registry event under a dedicated span.
    pub fn log_event(event_type: &str, detail: &str) {
        let span = info_span!("registry_event", event_type = event_type);
        span.in_scope(|| {
            tracing::info!(detail = detail, "Registry event occurred");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[traced_test]
    #[test]
    fn test_logging() {
        EventLogger::log_event("test", "sensor registered");
        assert!(logs_contain("Registry event occurred"));
    }
}
