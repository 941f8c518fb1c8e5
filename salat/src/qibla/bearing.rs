//! Great-circle bearing calculation.

use crate::coord::{GeoCoordinate, KAABA};

/// Mean Earth radius in kilometres (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Below this magnitude the `x` term of a zero-`y` bearing is rounding noise.
const COINCIDENT_EPSILON: f64 = 1e-12;

/// Calculate the initial bearing from `observer` to `target`.
///
/// Uses the spherical formulation
/// `atan2(sin Δλ, cos φo · tan φt − sin φo · cos Δλ)`, which is the
/// standard qibla formula.
///
/// # Returns
///
/// Bearing in degrees, always in [0, 360) (0 = north, 90 = east).
/// Coincident points have no meaningful direction and yield 0.
///
/// # Example
///
/// ```
/// use salat::coord::GeoCoordinate;
/// use salat::qibla::compute_bearing;
///
/// let bearing = compute_bearing(
///     GeoCoordinate::new(0.0, 0.0),
///     GeoCoordinate::new(0.0, 90.0),
/// );
/// assert!((bearing - 90.0).abs() < 1e-9);
/// ```
pub fn compute_bearing(observer: GeoCoordinate, target: GeoCoordinate) -> f64 {
    let phi_o = observer.latitude_rad();
    let phi_t = target.latitude_rad();
    let delta_lambda = target.longitude_rad() - observer.longitude_rad();

    let y = delta_lambda.sin();
    let mut x = phi_o.cos() * phi_t.tan() - phi_o.sin() * delta_lambda.cos();

    // cos φ · tan φ − sin φ is not exactly zero in floating point; a negative
    // residue would turn atan2(0, -ε) into 180.
    if y == 0.0 && x.abs() < COINCIDENT_EPSILON {
        x = 0.0;
    }

    let bearing = (y.atan2(x).to_degrees() + 360.0) % 360.0;

    // Values that round up to 360.0 belong at north; abs folds -0.0 to 0.0
    if bearing >= 360.0 {
        0.0
    } else {
        bearing.abs()
    }
}

/// Calculate the qibla bearing for an observer.
#[inline]
pub fn qibla_bearing(observer: GeoCoordinate) -> f64 {
    compute_bearing(observer, KAABA)
}

/// Great-circle distance between two points in kilometres (haversine).
///
/// # Example
///
/// ```
/// use salat::coord::GeoCoordinate;
/// use salat::qibla::distance_km;
///
/// // One degree of latitude is roughly 111 km
/// let d = distance_km(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(1.0, 0.0));
/// assert!((d - 111.2).abs() < 0.5);
/// ```
pub fn distance_km(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let lat1 = from.latitude_rad();
    let lat2 = to.latitude_rad();
    let delta_lat = lat2 - lat1;
    let delta_lon = to.longitude_rad() - from.longitude_rad();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} ± {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    // ==================== compute_bearing tests ====================

    #[test]
    fn test_coincident_point_is_north() {
        assert_eq!(compute_bearing(KAABA, KAABA), 0.0);
        assert_eq!(qibla_bearing(GeoCoordinate::new(21.4225, 39.8262)), 0.0);
    }

    #[test]
    fn test_coincident_points_elsewhere() {
        for &(lat, lon) in &[(0.0, 0.0), (51.5074, -0.1278), (-33.8688, 151.2093)] {
            let p = GeoCoordinate::new(lat, lon);
            assert_eq!(compute_bearing(p, p), 0.0, "coincident at {}", p);
        }
    }

    #[test]
    fn test_north_is_positive_zero() {
        assert!(compute_bearing(KAABA, KAABA).is_sign_positive());
        let due_north =
            compute_bearing(GeoCoordinate::new(0.0, 10.0), GeoCoordinate::new(45.0, 10.0));
        assert!(due_north.is_sign_positive());
        assert_eq!(due_north, 0.0);
    }

    #[test]
    fn test_due_east_along_equator() {
        let bearing = compute_bearing(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(0.0, 90.0));
        assert_close(bearing, 90.0, 1e-9);
    }

    #[test]
    fn test_due_west_along_equator() {
        let bearing =
            compute_bearing(GeoCoordinate::new(0.0, 0.0), GeoCoordinate::new(0.0, -90.0));
        assert_close(bearing, 270.0, 1e-9);
    }

    #[test]
    fn test_due_north_and_south() {
        let north = compute_bearing(GeoCoordinate::new(0.0, 10.0), GeoCoordinate::new(45.0, 10.0));
        assert_close(north, 0.0, 1e-9);

        let south = compute_bearing(GeoCoordinate::new(45.0, 10.0), GeoCoordinate::new(0.0, 10.0));
        assert_close(south, 180.0, 1e-9);
    }

    #[test]
    fn test_qibla_from_known_cities() {
        // Published qibla directions, rounded to the degree
        let london = qibla_bearing(GeoCoordinate::new(51.5074, -0.1278));
        assert_close(london, 119.0, 1.0);

        let new_york = qibla_bearing(GeoCoordinate::new(40.7128, -74.0060));
        assert_close(new_york, 58.5, 1.0);

        let jakarta = qibla_bearing(GeoCoordinate::new(-6.2088, 106.8456));
        assert_close(jakarta, 295.0, 1.0);

        let lagos = qibla_bearing(crate::coord::DEFAULT_LOCATION);
        assert_close(lagos, 63.3, 0.5);
    }

    #[test]
    fn test_bearing_always_in_range() {
        let mut lat = -89.0;
        while lat <= 89.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let observer = GeoCoordinate::new(lat, lon);
                let bearing = qibla_bearing(observer);
                assert!(
                    (0.0..360.0).contains(&bearing),
                    "bearing {} out of range for {}",
                    bearing,
                    observer
                );
                lon += 7.5;
            }
            lat += 4.5;
        }
    }

    #[test]
    fn test_bearing_is_finite_for_garbage_input() {
        let bearing = compute_bearing(GeoCoordinate::new(400.0, -999.0), KAABA);
        assert!(bearing.is_finite());
        assert!((0.0..360.0).contains(&bearing));
    }

    // ==================== distance_km tests ====================

    #[test]
    fn test_distance_zero_for_same_point() {
        assert_close(distance_km(KAABA, KAABA), 0.0, 1e-9);
    }

    #[test]
    fn test_distance_london_to_makkah() {
        // Roughly 4,790 km
        let d = distance_km(GeoCoordinate::new(51.5074, -0.1278), KAABA);
        assert_close(d, 4790.0, 50.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoCoordinate::new(6.5244, 3.3792);
        let b = GeoCoordinate::new(40.7128, -74.0060);
        assert_close(distance_km(a, b), distance_km(b, a), 1e-6);
    }
}
