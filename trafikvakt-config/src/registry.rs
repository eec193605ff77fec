//! Sensor registry configuration parameters.
//!
//! Controls directory bootstrap and buffer sizing:
//! - Sensors registered at startup
//! - Initial per-buffer capacity reservation

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Sensor registry configuration parameters.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RegistryConfig {
    /// Readings reserved up front in each newly registered buffer.
    /// A reservation only, never a cap: buffers grow without bound
    /// until explicitly cleared.
    #[serde(default = "default_initial_buffer_capacity")]
    #[validate(range(min = 1, max = 1_048_576))]
    pub initial_buffer_capacity: usize,

    /// Sensor identifiers registered when the registry is built from
    /// configuration.
    #[serde(default)]
    #[validate(custom(function = validation::validate_sensor_ids))]
    pub sensors: Vec<String>,
}

fn default_initial_buffer_capacity() -> usize {
    256
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_buffer_capacity: default_initial_buffer_capacity(),
            sensors: Vec::new(),
        }
    }
}
