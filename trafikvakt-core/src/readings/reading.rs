//! Traffic-signal observation records.
//!
//! A `Reading` carries one observation reported by a signal sensor.
//! The direction code is the only validated field: it must stay in
//! {0, 1, 2}, and a rejected update never touches the stored value.

use serde::{Deserialize, Serialize};

use crate::error::ReadingError;

/// Traffic movement direction encoded by the signal controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Left = 0,
    Straight = 1,
    Right = 2,
}

impl Direction {
    /// Decodes a raw direction code.
    pub fn from_code(code: u8) -> Result<Self, ReadingError> {
        match code {
            0 => Ok(Self::Left),
            1 => Ok(Self::Straight),
            2 => Ok(Self::Right),
            code => Err(ReadingError::InvalidDirection { code }),
        }
    }

    /// Raw code of this direction.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// One sensor observation.
///
/// Every field except the direction accepts any representable value,
/// including extreme magnitudes; bounds enforcement belongs to the
/// ingest layer, not this record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    id: String,
    volume: i64,
    speed: f64,
    queue_length: i64,
    direction: Direction,
}

impl Reading {
    /// Creates a new reading from raw field values. Fails when the
    /// direction code is outside {0, 1, 2}.
    pub fn new(
        id: impl Into<String>,
        volume: i64,
        speed: f64,
        queue_length: i64,
        direction_code: u8,
    ) -> Result<Self, ReadingError> {
        Ok(Self {
            id: id.into(),
            volume,
            speed,
            queue_length,
            direction: Direction::from_code(direction_code)?,
        })
    }

    /// Caller-assigned identifier; not unique across the system.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn volume(&self) -> i64 {
        self.volume
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn queue_length(&self) -> i64 {
        self.queue_length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_volume(&mut self, volume: i64) {
        self.volume = volume;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn set_queue_length(&mut self, queue_length: i64) {
        self.queue_length = queue_length;
    }

    /// Replaces the direction. A code outside {0, 1, 2} is rejected
    /// and the previous direction stays in place.
    pub fn set_direction(&mut self, code: u8) -> Result<(), ReadingError> {
        self.direction = Direction::from_code(code)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn constructs_with_valid_direction() {
        let reading = Reading::new("a", 10, 30.5, 5, 1).unwrap();
        assert_eq!(reading.id(), "a");
        assert_eq!(reading.volume(), 10);
        assert_eq!(reading.speed(), 30.5);
        assert_eq!(reading.queue_length(), 5);
        assert_eq!(reading.direction(), Direction::Straight);
    }

    #[test]
    fn rejects_invalid_direction_on_construction() {
        assert_eq!(
            Reading::new("a", 10, 30.5, 5, 3).unwrap_err(),
            ReadingError::InvalidDirection { code: 3 }
        );
    }

    #[test]
    fn failed_direction_update_is_not_applied() {
        let mut reading = Reading::new("a", 10, 30.5, 5, 2).unwrap();
        assert!(reading.set_direction(7).is_err());
        assert_eq!(reading.direction(), Direction::Right);
    }

    #[test]
    fn unvalidated_setters_replace_unconditionally() {
        let mut reading = Reading::new("a", 10, 30.5, 5, 0).unwrap();
        reading.set_id("b");
        reading.set_volume(-1);
        reading.set_speed(-120.25);
        reading.set_queue_length(i64::MIN);
        assert_eq!(reading.id(), "b");
        assert_eq!(reading.volume(), -1);
        assert_eq!(reading.speed(), -120.25);
        assert_eq!(reading.queue_length(), i64::MIN);
    }

    #[test]
    fn accepts_boundary_magnitudes() {
        let reading = Reading::new("edge", i64::MAX, f64::MAX, i64::MAX, 0).unwrap();
        assert_eq!(reading.volume(), i64::MAX);
        assert_eq!(reading.speed(), f64::MAX);
        assert_eq!(reading.queue_length(), i64::MAX);
        assert_eq!(reading.direction(), Direction::Left);
    }

    proptest! {
        #[test]
        fn rejects_all_codes_outside_range(code in 3u8..) {
            prop_assert_eq!(
                Reading::new("r", 0, 0.0, 0, code).unwrap_err(),
                ReadingError::InvalidDirection { code }
            );
        }

        #[test]
        fn failed_mutation_keeps_prior_value(code in 3u8..) {
            let mut reading = Reading::new("r", 0, 0.0, 0, 1).unwrap();
            prop_assert!(reading.set_direction(code).is_err());
            prop_assert_eq!(reading.direction(), Direction::Straight);
        }

        #[test]
        fn valid_codes_round_trip(code in 0u8..3) {
            let mut reading = Reading::new("r", 0, 0.0, 0, code).unwrap();
            prop_assert_eq!(reading.direction().code(), code);
            let next = (code + 1) % 3;
            reading.set_direction(next).unwrap();
            prop_assert_eq!(reading.direction().code(), next);
        }
    }
}
