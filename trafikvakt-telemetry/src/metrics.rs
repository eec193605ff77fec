//! ## trafikvakt-telemetry::metrics
//! **Prometheus counters for the reading registry**
//!
//! ### Components:
//! - `readings_routed`: readings appended to a registered sensor
//! - `readings_dropped`: readings addressed to an unknown sensor
//! - `buffers_cleared`: buffers emptied by bulk clears

use prometheus::{Counter, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub readings_routed: prometheus::Counter,
    pub readings_dropped: prometheus::Counter,
    pub buffers_cleared: prometheus::Counter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let readings_routed = Counter::new(
            "trafikvakt_readings_routed_total",
            "Readings routed into a registered sensor buffer",
        )
        .unwrap();

        let readings_dropped = Counter::new(
            "trafikvakt_readings_dropped_total",
            "Readings dropped because the addressed sensor is unregistered",
        )
        .unwrap();

        let buffers_cleared = Counter::new(
            "trafikvakt_buffers_cleared_total",
            "Sensor buffers emptied by bulk clears",
        )
        .unwrap();

        registry.register(Box::new(readings_routed.clone())).unwrap();
        registry.register(Box::new(readings_dropped.clone())).unwrap();
        registry.register(Box::new(buffers_cleared.clone())).unwrap();

        Self {
            registry,
            readings_routed,
            readings_dropped,
            buffers_cleared,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_routed_readings(&self) {
        self.readings_routed.inc();
    }

    pub fn inc_dropped_readings(&self) {
        self.readings_dropped.inc();
    }

    pub fn inc_cleared_buffers(&self) {
        self.buffers_cleared.inc();
    }
}
