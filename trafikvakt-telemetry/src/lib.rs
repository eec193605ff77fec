//! # Trafikvakt Telemetry and Monitoring
//!
//! Crate for logging and metrics functionalities.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::MetricsRecorder;
