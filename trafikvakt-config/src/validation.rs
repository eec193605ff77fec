//! Custom validation functions for configuration.
//!
//! Provides shared validation logic used across multiple configuration modules.

use validator::ValidationError;

/// Validate that every sensor identifier is non-empty, starts with an
/// alphanumeric character, and uses only the allowed character set.
pub fn validate_sensor_ids(ids: &[String]) -> Result<(), ValidationError> {
    let re = regex::Regex::new("^[A-Za-z0-9][A-Za-z0-9_-]*$")
        .map_err(|_| ValidationError::new("invalid_regex"))?;

    if ids.iter().all(|id| re.is_match(id)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_sensor_id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_ids() {
        let ids = vec!["s1".to_string(), "junction-7_north".to_string()];
        assert!(validate_sensor_ids(&ids).is_ok());
    }

    #[test]
    fn rejects_empty_and_leading_punctuation() {
        assert!(validate_sensor_ids(&["".to_string()]).is_err());
        assert!(validate_sensor_ids(&["-s1".to_string()]).is_err());
    }
}
