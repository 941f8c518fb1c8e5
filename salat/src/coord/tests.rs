//! Tests for coordinate types

use super::*;

#[test]
fn test_new_accepts_out_of_range_values() {
    let coord = GeoCoordinate::new(123.0, -500.0);
    assert_eq!(coord.latitude, 123.0);
    assert_eq!(coord.longitude, -500.0);
}

#[test]
fn test_validated_accepts_boundaries() {
    assert!(GeoCoordinate::validated(90.0, 180.0).is_ok());
    assert!(GeoCoordinate::validated(-90.0, -180.0).is_ok());
    assert!(GeoCoordinate::validated(0.0, 0.0).is_ok());
}

#[test]
fn test_invalid_latitude_too_high() {
    let result = GeoCoordinate::validated(90.5, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_latitude_too_low() {
    let result = GeoCoordinate::validated(-91.0, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_longitude() {
    let result = GeoCoordinate::validated(0.0, 181.0);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));

    let result = GeoCoordinate::validated(0.0, -180.5);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_nan_is_rejected() {
    assert!(GeoCoordinate::validated(f64::NAN, 0.0).is_err());
    assert!(GeoCoordinate::validated(0.0, f64::NAN).is_err());
}

#[test]
fn test_error_messages() {
    let err = CoordError::InvalidLatitude(95.0);
    assert_eq!(
        err.to_string(),
        "Invalid latitude: 95 (must be between -90 and 90)"
    );

    let err = CoordError::InvalidLongitude(-200.5);
    assert_eq!(
        err.to_string(),
        "Invalid longitude: -200.5 (must be between -180 and 180)"
    );
}

#[test]
fn test_display_uses_hemispheres() {
    let nyc = GeoCoordinate::new(40.7128, -74.0060);
    assert_eq!(nyc.to_string(), "40.7128°N, 74.0060°W");

    assert_eq!(KAABA.to_string(), "21.4225°N, 39.8262°E");
}

#[test]
fn test_radians() {
    let coord = GeoCoordinate::new(180.0, 90.0);
    assert!((coord.latitude_rad() - std::f64::consts::PI).abs() < 1e-12);
    assert!((coord.longitude_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn test_default_location_is_lagos() {
    assert_eq!(DEFAULT_LOCATION, GeoCoordinate::new(6.5244, 3.3792));
    assert_eq!(DEFAULT_LOCATION_LABEL, "Lagos, Nigeria");
}
