//! Configuration key access and validation.
//!
//! Every setting is addressable by a dotted name such as
//! `adhan.match_window_secs`. Values are validated against a per-key
//! [`ValueSpecification`] before they are stored.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use super::defaults::{
    MAX_ADHAN_MATCH_WINDOW_SECS, MAX_IQAMAH_OFFSET_MINUTES, MAX_TICK_INTERVAL_MS,
    MIN_TICK_INTERVAL_MS,
};
use super::settings::ConfigFile;
use crate::coord::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to one field of [`ConfigFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // Location
    LocationLatitude,
    LocationLongitude,
    LocationLabel,

    // Timings
    TimingsApiBase,
    TimingsMethod,
    TimingsSchool,
    TimingsIqamahOffsetMinutes,

    // Adhan
    AdhanEnabled,
    AdhanMatchWindowSecs,
    AdhanTickIntervalMs,

    // Compass
    CompassSmoothingFactor,

    // Logging
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Canonical key name (e.g., "timings.method").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::LocationLatitude => "location.latitude",
            ConfigKey::LocationLongitude => "location.longitude",
            ConfigKey::LocationLabel => "location.label",
            ConfigKey::TimingsApiBase => "timings.api_base",
            ConfigKey::TimingsMethod => "timings.method",
            ConfigKey::TimingsSchool => "timings.school",
            ConfigKey::TimingsIqamahOffsetMinutes => "timings.iqamah_offset_minutes",
            ConfigKey::AdhanEnabled => "adhan.enabled",
            ConfigKey::AdhanMatchWindowSecs => "adhan.match_window_secs",
            ConfigKey::AdhanTickIntervalMs => "adhan.tick_interval_ms",
            ConfigKey::CompassSmoothingFactor => "compass.smoothing_factor",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Section name (e.g., "timings").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Key name within the section (e.g., "method").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Current value as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::LocationLatitude => config.location.latitude.to_string(),
            ConfigKey::LocationLongitude => config.location.longitude.to_string(),
            ConfigKey::LocationLabel => config.location.label.clone(),
            ConfigKey::TimingsApiBase => config.timings.api_base.clone(),
            ConfigKey::TimingsMethod => config.timings.method.to_string(),
            ConfigKey::TimingsSchool => config.timings.school.to_string(),
            ConfigKey::TimingsIqamahOffsetMinutes => {
                config.timings.iqamah_offset_minutes.to_string()
            }
            ConfigKey::AdhanEnabled => config.adhan.enabled.to_string(),
            ConfigKey::AdhanMatchWindowSecs => config.adhan.match_window_secs.to_string(),
            ConfigKey::AdhanTickIntervalMs => config.adhan.tick_interval_ms.to_string(),
            ConfigKey::CompassSmoothingFactor => config.compass.smoothing_factor.to_string(),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Validates `value` and stores it in `config`.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        let value = value.trim();

        match self {
            ConfigKey::LocationLatitude => config.location.latitude = self.parse(value)?,
            ConfigKey::LocationLongitude => config.location.longitude = self.parse(value)?,
            ConfigKey::LocationLabel => config.location.label = value.to_string(),
            ConfigKey::TimingsApiBase => config.timings.api_base = value.to_string(),
            ConfigKey::TimingsMethod => config.timings.method = self.parse(value)?,
            ConfigKey::TimingsSchool => config.timings.school = self.parse(value)?,
            ConfigKey::TimingsIqamahOffsetMinutes => {
                config.timings.iqamah_offset_minutes = self.parse(value)?
            }
            ConfigKey::AdhanEnabled => config.adhan.enabled = parse_bool(value),
            ConfigKey::AdhanMatchWindowSecs => {
                config.adhan.match_window_secs = self.parse(value)?
            }
            ConfigKey::AdhanTickIntervalMs => config.adhan.tick_interval_ms = self.parse(value)?,
            ConfigKey::CompassSmoothingFactor => {
                config.compass.smoothing_factor = self.parse(value)?
            }
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
        Ok(())
    }

    /// Validates a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value.trim())
            .map_err(|reason| self.failed(reason))
    }

    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::LocationLatitude => Box::new(NumberRangeSpec::inclusive(MIN_LAT, MAX_LAT)),
            ConfigKey::LocationLongitude => {
                Box::new(NumberRangeSpec::inclusive(MIN_LON, MAX_LON))
            }
            ConfigKey::LocationLabel => Box::new(AnyStringSpec),
            ConfigKey::TimingsApiBase => Box::new(UrlSpec),
            ConfigKey::TimingsMethod => Box::new(IntegerRangeSpec::new(0, u8::MAX as u64)),
            ConfigKey::TimingsSchool => Box::new(OneOfSpec::new(&["0", "1"])),
            ConfigKey::TimingsIqamahOffsetMinutes => {
                Box::new(IntegerRangeSpec::new(0, MAX_IQAMAH_OFFSET_MINUTES as u64))
            }
            ConfigKey::AdhanEnabled => Box::new(BooleanSpec),
            ConfigKey::AdhanMatchWindowSecs => {
                Box::new(IntegerRangeSpec::new(0, MAX_ADHAN_MATCH_WINDOW_SECS))
            }
            ConfigKey::AdhanTickIntervalMs => Box::new(IntegerRangeSpec::new(
                MIN_TICK_INTERVAL_MS,
                MAX_TICK_INTERVAL_MS,
            )),
            ConfigKey::CompassSmoothingFactor => Box::new(NumberRangeSpec::exclusive_min(0.0, 1.0)),
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    fn parse<T: FromStr>(&self, value: &str) -> Result<T, ConfigKeyError> {
        value
            .parse()
            .map_err(|_| self.failed(format!("could not parse '{}'", value)))
    }

    fn failed(&self, reason: String) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        }
    }

    /// All supported keys, in config-file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::LocationLatitude,
            ConfigKey::LocationLongitude,
            ConfigKey::LocationLabel,
            ConfigKey::TimingsApiBase,
            ConfigKey::TimingsMethod,
            ConfigKey::TimingsSchool,
            ConfigKey::TimingsIqamahOffsetMinutes,
            ConfigKey::AdhanEnabled,
            ConfigKey::AdhanMatchWindowSecs,
            ConfigKey::AdhanTickIntervalMs,
            ConfigKey::CompassSmoothingFactor,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications
// ============================================================================

trait ValueSpecification {
    /// Ok(()) if valid, Err(reason) if not.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

struct AnyStringSpec;

impl ValueSpecification for AnyStringSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

struct OneOfSpec {
    options: &'static [&'static str],
}

impl OneOfSpec {
    fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }
}

impl ValueSpecification for OneOfSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let lower = value.to_lowercase();
        if self.options.iter().any(|opt| *opt == lower) {
            Ok(())
        } else {
            Err(format!("must be one of: {}", self.options.join(", ")))
        }
    }
}

/// Unsigned integer within `min..=max`.
struct IntegerRangeSpec {
    min: u64,
    max: u64,
}

impl IntegerRangeSpec {
    fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

impl ValueSpecification for IntegerRangeSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let reason = || format!("must be an integer between {} and {}", self.min, self.max);
        let n = value.parse::<u64>().map_err(|_| reason())?;
        if (self.min..=self.max).contains(&n) {
            Ok(())
        } else {
            Err(reason())
        }
    }
}

/// Finite number within `[min, max]`, or `(min, max]` when `min_exclusive`.
struct NumberRangeSpec {
    min: f64,
    max: f64,
    min_exclusive: bool,
}

impl NumberRangeSpec {
    fn inclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: false,
        }
    }

    fn exclusive_min(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_exclusive: true,
        }
    }
}

impl ValueSpecification for NumberRangeSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let reason = || {
            if self.min_exclusive {
                format!("must be greater than {} and at most {}", self.min, self.max)
            } else {
                format!("must be a number between {} and {}", self.min, self.max)
            }
        };
        let n = value.parse::<f64>().map_err(|_| reason())?;
        let above_min = if self.min_exclusive {
            n > self.min
        } else {
            n >= self.min
        };
        if n.is_finite() && above_min && n <= self.max {
            Ok(())
        } else {
            Err(reason())
        }
    }
}

struct BooleanSpec;

impl ValueSpecification for BooleanSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let lower = value.to_lowercase();
        let valid = ["true", "false", "yes", "no", "1", "0", "on", "off"];
        if valid.contains(&lower.as_str()) {
            Ok(())
        } else {
            Err("must be true/false, yes/no, 1/0, or on/off".to_string())
        }
    }
}

/// Non-empty path.
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

/// http(s) URL.
struct UrlSpec;

impl ValueSpecification for UrlSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err("must be a URL starting with 'http://' or 'https://'".to_string())
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(super) fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "yes" | "1" | "on"
    )
}

/// Expands a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Collapses the home directory back to `~`.
pub(super) fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
