//! Per-sensor reading buffers.
//!
//! Defines the `SensorBuffer`, an ordered in-memory collection of the
//! readings reported by one sensor. Appends are amortized O(1); the
//! buffer grows without bound until explicitly cleared.

use super::reading::Reading;

/// Ordered, growable buffer of readings for a single sensor.
///
/// Insertion order is preserved and duplicates are permitted. The
/// buffer has no identity of its own; it is addressed through the
/// registry key that owns it.
#[derive(Clone, Debug, Default)]
pub struct SensorBuffer {
    readings: Vec<Reading>,
}

impl SensorBuffer {
    pub fn new() -> Self {
        Self {
            readings: Vec::new(),
        }
    }

    /// Pre-reserves space for `capacity` readings to cut early regrowth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: Vec::with_capacity(capacity),
        }
    }

    /// Appends a reading at the end of the sequence, taking ownership.
    pub fn append(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    /// Read-only view of the buffered readings, in arrival order.
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Empties the buffer. The allocation is retained for reuse;
    /// clearing an already-empty buffer is a no-op.
    pub fn clear(&mut self) {
        self.readings.clear();
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reading(volume: i64) -> Reading {
        Reading::new("r", volume, 0.0, 0, 0).unwrap()
    }

    #[test]
    fn append_preserves_arrival_order() {
        let mut buffer = SensorBuffer::new();
        buffer.append(reading(1));
        buffer.append(reading(2));
        buffer.append(reading(3));
        let volumes: Vec<i64> = buffer.readings().iter().map(Reading::volume).collect();
        assert_eq!(volumes, vec![1, 2, 3]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut buffer = SensorBuffer::new();
        buffer.append(reading(7));
        buffer.append(reading(7));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut buffer = SensorBuffer::new();
        buffer.clear();
        assert!(buffer.is_empty());

        buffer.append(reading(1));
        buffer.clear();
        assert!(buffer.readings().is_empty());
        buffer.clear();
        assert!(buffer.readings().is_empty());
    }

    #[test]
    fn with_capacity_starts_empty() {
        let buffer = SensorBuffer::with_capacity(128);
        assert!(buffer.is_empty());
    }

    proptest! {
        #[test]
        fn read_all_returns_exactly_what_was_appended(
            volumes in proptest::collection::vec(any::<i64>(), 0..64)
        ) {
            let mut buffer = SensorBuffer::new();
            for v in &volumes {
                buffer.append(reading(*v));
            }
            let stored: Vec<i64> = buffer.readings().iter().map(Reading::volume).collect();
            prop_assert_eq!(stored, volumes);
        }
    }
}
