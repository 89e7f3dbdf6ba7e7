//! Geographic coordinate value type.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    ///
    /// Used for the static route tables; runtime input should go through
    /// [`Coordinate::try_new`].
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a coordinate, rejecting values outside the valid degree ranges.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordinateError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordinateError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn is_valid(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat) && (MIN_LON..=MAX_LON).contains(&self.lon)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
