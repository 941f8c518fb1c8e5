//! Coordinate type definitions

use std::fmt;
use thiserror::Error;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A point on the Earth's surface in decimal degrees.
///
/// Produced by an external location provider (GPS, IP lookup, or a
/// configured fallback) and consumed by the bearing calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Degrees north of the equator (-90 to 90)
    pub latitude: f64,
    /// Degrees east of the prime meridian (-180 to 180)
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate without range checks.
    ///
    /// Out-of-range values are accepted; the bearing computed from them is
    /// finite but meaningless. Use [`GeoCoordinate::validated`] when the
    /// input comes from an untrusted source.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting values outside the valid ranges.
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(CoordError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..=MAX_LON).contains(&longitude) {
            return Err(CoordError::InvalidLongitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Latitude in radians.
    #[inline]
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians.
    #[inline]
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

/// Errors raised by the validating coordinate constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside -90.0 to 90.0
    #[error("Invalid latitude: {0} (must be between {min} and {max})", min = MIN_LAT, max = MAX_LAT)]
    InvalidLatitude(f64),
    /// Longitude is outside -180.0 to 180.0
    #[error("Invalid longitude: {0} (must be between {min} and {max})", min = MIN_LON, max = MAX_LON)]
    InvalidLongitude(f64),
}
