//! ## trafikvakt-core::readings
//! **Observation records and per-sensor buffers**
//!
//! ### Key Submodules:
//! - `reading`: one sensor observation with a validated direction code
//! - `buffer`: ordered, growable per-sensor collection of readings

pub mod buffer;
pub mod reading;

pub use buffer::SensorBuffer;
pub use reading::{Direction, Reading};
