//! Geographic coordinates and well-known locations.
//!
//! The core never acquires a location itself. Hosts hand it a
//! [`GeoCoordinate`], falling back to [`DEFAULT_LOCATION`] (or the
//! configured `[location]` section) when GPS and IP lookup both fail.

mod types;

#[cfg(test)]
mod tests;

pub use types::{CoordError, GeoCoordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// The Kaaba in Makkah, the fixed target of every qibla bearing.
pub const KAABA: GeoCoordinate = GeoCoordinate::new(21.4225, 39.8262);

/// Fallback observer position when no location source answers (Lagos).
pub const DEFAULT_LOCATION: GeoCoordinate = GeoCoordinate::new(6.5244, 3.3792);

/// Human-readable label for [`DEFAULT_LOCATION`].
pub const DEFAULT_LOCATION_LABEL: &str = "Lagos, Nigeria";
