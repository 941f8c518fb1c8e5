//! Default values and range limits for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::adhan::MAX_MATCH_WINDOW_SECS;
use crate::coord::{DEFAULT_LOCATION, DEFAULT_LOCATION_LABEL};
use crate::qibla::DEFAULT_SMOOTHING_FACTOR;
use crate::schedule::DEFAULT_IQAMAH_OFFSET_MINUTES;
use crate::timings::{DEFAULT_API_BASE, DEFAULT_METHOD, DEFAULT_SCHOOL};

/// Largest accepted Iqamah offset in minutes.
pub const MAX_IQAMAH_OFFSET_MINUTES: u32 = 120;

/// Default match window for hosts ticking once per second.
///
/// A tick that wakes a few milliseconds late can jump straight from second
/// N-1 to N+1; one second of slack still catches the prayer at N.
pub const DEFAULT_ADHAN_MATCH_WINDOW_SECS: u64 = 1;

/// Largest accepted match window (re-exported from the trigger policy).
pub const MAX_ADHAN_MATCH_WINDOW_SECS: u64 = MAX_MATCH_WINDOW_SECS;

/// Default daemon tick interval: once per second.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Bounds for the daemon tick interval.
pub const MIN_TICK_INTERVAL_MS: u64 = 100;
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "salat.log";

/// Default log file path (~/.salat/salat.log).
pub fn default_log_file() -> PathBuf {
    super::file::config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            location: LocationSettings {
                latitude: DEFAULT_LOCATION.latitude,
                longitude: DEFAULT_LOCATION.longitude,
                label: DEFAULT_LOCATION_LABEL.to_string(),
            },
            timings: TimingsSettings {
                api_base: DEFAULT_API_BASE.to_string(),
                method: DEFAULT_METHOD,
                school: DEFAULT_SCHOOL,
                iqamah_offset_minutes: DEFAULT_IQAMAH_OFFSET_MINUTES,
            },
            adhan: AdhanSettings {
                enabled: true,
                match_window_secs: DEFAULT_ADHAN_MATCH_WINDOW_SECS,
                tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            },
            compass: CompassSettings {
                smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
