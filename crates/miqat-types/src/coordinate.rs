use crate::error::MiqatError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic position: latitude and longitude in decimal degrees,
/// altitude in meters above sea level.
///
/// The altitude only influences the sunrise/sunset horizon-dip correction;
/// it is never validated and defaults to sea level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
    pub altitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate after validating the documented ranges.
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees, -90 to 90
    /// * `lng` - Longitude in degrees, -180 to 180
    ///
    /// # Errors
    /// Returns `CoordinateOutOfRange` when either value falls outside its
    /// bounds. Out-of-range coordinates would produce silently wrong
    /// astronomy, so they are rejected up front.
    pub fn new(lat: f64, lng: f64) -> Result<Self, MiqatError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(MiqatError::latitude_out_of_range(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(MiqatError::longitude_out_of_range(lng));
        }
        Ok(Self { lat, lng, altitude: 0.0 })
    }

    /// Creates a coordinate without range validation, for inputs already
    /// known to be in range.
    pub fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng, altitude: 0.0 }
    }

    /// Sets the altitude in meters above sea level.
    pub fn with_altitude(mut self, meters: f64) -> Self {
        self.altitude = meters;
        self
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}
