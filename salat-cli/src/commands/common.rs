//! Helpers shared across CLI commands.

use std::path::Path;

use chrono::NaiveDateTime;
use salat::config::ConfigFile;
use salat::coord::GeoCoordinate;
use salat::schedule::PrayerSchedule;
use salat::timings;

use crate::error::CliError;

/// Accepted `--at` formats.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Observer position plus an optional display label.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinate: GeoCoordinate,
    pub label: Option<String>,
}

impl Location {
    /// `"Lagos, Nigeria (6.5244°N, 3.3792°E)"`, or just the coordinate.
    pub fn describe(&self) -> String {
        match &self.label {
            Some(label) if !label.is_empty() => format!("{} ({})", label, self.coordinate),
            _ => self.coordinate.to_string(),
        }
    }
}

/// Resolves the observer location: CLI flags take precedence over config.
///
/// `--lat` and `--lon` must be given together.
pub fn resolve_location(
    lat: Option<f64>,
    lon: Option<f64>,
    config: &ConfigFile,
) -> Result<Location, CliError> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let coordinate = GeoCoordinate::validated(lat, lon)
                .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
            Ok(Location {
                coordinate,
                label: None,
            })
        }
        (None, None) => {
            let coordinate =
                GeoCoordinate::validated(config.location.latitude, config.location.longitude)
                    .map_err(|e| CliError::Config(e.to_string()))?;
            Ok(Location {
                coordinate,
                label: Some(config.location.label.clone()),
            })
        }
        _ => Err(CliError::InvalidArgument(
            "--lat and --lon must be given together".to_string(),
        )),
    }
}

/// Parses `--at` as local wall-clock time.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, CliError> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "'{}' is not a date-time like '2024-03-15 21:00:00'",
                value
            ))
        })
}

/// Loads a schedule from a provider response or bare timings file.
pub fn load_schedule(path: &Path) -> Result<PrayerSchedule, CliError> {
    timings::load_file(path).map_err(|error| CliError::Timings {
        path: path.to_path_buf(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_location_from_config() {
        let config = ConfigFile::default();
        let location = resolve_location(None, None, &config).unwrap();
        assert_eq!(location.coordinate, GeoCoordinate::new(6.5244, 3.3792));
        assert_eq!(
            location.describe(),
            "Lagos, Nigeria (6.5244°N, 3.3792°E)"
        );
    }

    #[test]
    fn test_location_from_flags() {
        let config = ConfigFile::default();
        let location = resolve_location(Some(51.5), Some(-0.1), &config).unwrap();
        assert_eq!(location.coordinate, GeoCoordinate::new(51.5, -0.1));
        assert_eq!(location.label, None);
    }

    #[test]
    fn test_location_requires_both_flags() {
        let config = ConfigFile::default();
        assert!(matches!(
            resolve_location(Some(51.5), None, &config),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_location_rejects_out_of_range() {
        let config = ConfigFile::default();
        assert!(resolve_location(Some(95.0), Some(0.0), &config).is_err());
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        assert_eq!(parse_datetime("2024-03-15 21:00:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-15T21:00:00").unwrap(), expected);
        assert!(parse_datetime("21:00").is_err());
    }

    #[test]
    fn test_load_schedule_reports_path() {
        let err = load_schedule(Path::new("/nonexistent/timings.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/timings.json"));
    }
}
