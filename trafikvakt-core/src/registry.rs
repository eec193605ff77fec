//! Sensor directory and reading routing.
//!
//! The `SensorRegistry` maps sensor identifiers to their buffers and
//! is the external entry point of the system: readings are routed in
//! by identifier and retrieved or cleared in bulk the same way. The
//! registry exclusively owns every buffer; callers only ever see
//! borrowed read-only views.

use std::collections::HashMap;

use tracing::{debug, warn};

use trafikvakt_config::RegistryConfig;
use trafikvakt_telemetry::MetricsRecorder;

use crate::readings::{Reading, SensorBuffer};

/// Directory of sensors and their buffered readings.
///
/// Single-threaded and synchronous: every operation runs to completion
/// on the caller's thread before control returns.
#[derive(Debug)]
pub struct SensorRegistry {
    sensors: HashMap<String, SensorBuffer>,
    initial_capacity: usize,
    metrics: MetricsRecorder,
}

impl SensorRegistry {
    pub fn new() -> Self {
        Self::with_metrics(MetricsRecorder::new())
    }

    /// Creates an empty registry reporting into `metrics`.
    pub fn with_metrics(metrics: MetricsRecorder) -> Self {
        Self {
            sensors: HashMap::new(),
            initial_capacity: 0,
            metrics,
        }
    }

    /// Builds a registry from configuration, pre-registering the
    /// configured sensors with the configured buffer reservation.
    pub fn from_config(config: &RegistryConfig, metrics: MetricsRecorder) -> Self {
        let mut registry = Self {
            sensors: HashMap::with_capacity(config.sensors.len()),
            initial_capacity: config.initial_buffer_capacity,
            metrics,
        };
        for id in &config.sensors {
            registry.register_sensor(id);
        }
        registry
    }

    /// Registers `id` with a fresh empty buffer.
    ///
    /// Re-registering an existing sensor replaces its buffer wholesale:
    /// the prior readings are discarded.
    pub fn register_sensor(&mut self, id: &str) {
        let buffer = SensorBuffer::with_capacity(self.initial_capacity);
        if self.sensors.insert(id.to_string(), buffer).is_some() {
            warn!(sensor = id, "re-registered sensor, prior readings discarded");
        } else {
            debug!(sensor = id, "registered sensor");
        }
    }

    /// Routes `reading` into the buffer registered under `id`.
    ///
    /// A reading addressed to an unregistered sensor is dropped without
    /// error; the drop is visible in the logs and the dropped-readings
    /// counter.
    pub fn route(&mut self, id: &str, reading: Reading) {
        match self.sensors.get_mut(id) {
            Some(buffer) => {
                buffer.append(reading);
                self.metrics.inc_routed_readings();
            }
            None => {
                debug!(sensor = id, "dropped reading for unregistered sensor");
                self.metrics.inc_dropped_readings();
            }
        }
    }

    /// Read-only view of the readings buffered under `id`, in arrival
    /// order. Unknown sensors yield an empty view, indistinguishable
    /// from a registered-but-empty buffer.
    pub fn readings_of(&self, id: &str) -> &[Reading] {
        self.sensors.get(id).map_or(&[], SensorBuffer::readings)
    }

    /// Empties every buffer, in unspecified order. Sensors stay
    /// registered.
    pub fn clear_all(&mut self) {
        for buffer in self.sensors.values_mut() {
            buffer.clear();
            self.metrics.inc_cleared_buffers();
        }
        debug!(sensors = self.sensors.len(), "cleared all buffers");
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sensors.contains_key(id)
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Registered sensor identifiers, in unspecified order.
    pub fn sensor_ids(&self) -> impl Iterator<Item = &str> {
        self.sensors.keys().map(String::as_str)
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

impl Default for SensorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
