//! Geographic primitives
//!
//! `GeoPoint` is the single coordinate type used by the pin, the rings and the
//! positioning providers.

pub mod ip_location;

use crate::constants::geo::METERS_PER_DEGREE_LAT;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic point (latitude, longitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that the point is within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }

    /// Point `meters` due north of this one, using a flat degrees-per-meter
    /// approximation. Longitude is unchanged.
    pub fn offset_north(&self, meters: f64) -> Self {
        Self::new(self.lat + meters / METERS_PER_DEGREE_LAT, self.lng)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
