//! Settings structs for each configuration section.
//!
//! Pure data plus a few conversions into the domain types; parsing lives in
//! [`super::parser`] and serialization in [`super::writer`].

use std::path::PathBuf;
use std::time::Duration;

use crate::adhan::TriggerPolicy;
use crate::coord::GeoCoordinate;
use crate::qibla::SmoothingFactor;
use crate::timings::TimingsRequest;
use chrono::NaiveDate;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub location: LocationSettings,
    pub timings: TimingsSettings,
    pub adhan: AdhanSettings,
    pub compass: CompassSettings,
    pub logging: LoggingSettings,
}

/// Observer location.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSettings {
    /// Degrees, -90..=90
    pub latitude: f64,
    /// Degrees, -180..=180
    pub longitude: f64,
    /// Human-readable place name shown next to the schedule
    pub label: String,
}

impl LocationSettings {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// Prayer-times provider settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingsSettings {
    /// Base URL of the AlAdhan-compatible API
    pub api_base: String,
    /// Calculation method identifier understood by the provider
    pub method: u8,
    /// Asr juristic school: 0 = Shafi'i, 1 = Hanafi
    pub school: u8,
    /// Minutes between Adhan and Iqamah
    pub iqamah_offset_minutes: u32,
}

impl TimingsSettings {
    /// Builds the provider request for `date` at `coordinate`.
    pub fn request(&self, coordinate: GeoCoordinate, date: NaiveDate) -> TimingsRequest {
        TimingsRequest::new(coordinate, date)
            .with_method(self.method)
            .with_school(self.school)
    }
}

/// Adhan trigger settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AdhanSettings {
    /// Whether the watch daemon emits announcements at all
    pub enabled: bool,
    /// Seconds after a prayer start during which it may still fire.
    /// 0 means exact-second matching.
    pub match_window_secs: u64,
    /// Daemon tick interval in milliseconds
    pub tick_interval_ms: u64,
}

impl AdhanSettings {
    pub fn policy(&self) -> TriggerPolicy {
        TriggerPolicy::with_match_window(Duration::from_secs(self.match_window_secs))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Compass settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompassSettings {
    /// Fraction of the remaining angular difference applied per frame
    pub smoothing_factor: f64,
}

impl CompassSettings {
    /// The configured factor, or the default when out of range.
    pub fn smoothing(&self) -> SmoothingFactor {
        SmoothingFactor::new(self.smoothing_factor).unwrap_or_default()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
