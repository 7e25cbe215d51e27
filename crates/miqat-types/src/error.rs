use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from miqat operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum MiqatError {
    /// Unrecognized calculation method token.
    #[error("Unknown calculation method: {token} (expected one of MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Jafari)")]
    UnknownMethod { token: String },

    /// Unrecognized high-latitude rule token.
    #[error("Unknown high-latitude rule: {token} (expected one of None, NightMiddle, OneSeventh, AngleBased)")]
    UnknownHighLatitudeRule { token: String },

    /// Latitude or longitude outside its valid numeric bounds.
    #[error("{field} {value} is out of range ({min} to {max})")]
    CoordinateOutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl MiqatError {
    /// Creates an `UnknownMethod` error.
    pub fn unknown_method(token: impl Into<String>) -> Self {
        Self::UnknownMethod { token: token.into() }
    }

    /// Creates an `UnknownHighLatitudeRule` error.
    pub fn unknown_rule(token: impl Into<String>) -> Self {
        Self::UnknownHighLatitudeRule { token: token.into() }
    }

    /// Creates a `CoordinateOutOfRange` error for a latitude value.
    pub fn latitude_out_of_range(value: f64) -> Self {
        Self::CoordinateOutOfRange {
            field: "Latitude".into(),
            value,
            min: -90.0,
            max: 90.0,
        }
    }

    /// Creates a `CoordinateOutOfRange` error for a longitude value.
    pub fn longitude_out_of_range(value: f64) -> Self {
        Self::CoordinateOutOfRange {
            field: "Longitude".into(),
            value,
            min: -180.0,
            max: 180.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MiqatError::unknown_method("isna");
        assert!(err.to_string().starts_with("Unknown calculation method: isna"));

        let err = MiqatError::latitude_out_of_range(95.0);
        assert_eq!(err.to_string(), "Latitude 95 is out of range (-90 to 90)");

        let err = MiqatError::longitude_out_of_range(-200.0);
        assert_eq!(err.to_string(), "Longitude -200 is out of range (-180 to 180)");
    }

    #[test]
    fn test_error_is_cloneable_and_comparable() {
        let err = MiqatError::unknown_rule("Middle");
        assert_eq!(err.clone(), err);
    }
}
