//! Error types for schedule parsing.

use thiserror::Error;

use super::PrayerName;

/// Errors raised while building a [`super::PrayerSchedule`] from raw timings.
///
/// The core never degrades partially: a schedule either has all five
/// prayers with valid times or is not built at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleParseError {
    /// The timings map had no entry for a prayer.
    #[error("Missing time for {0}")]
    MissingPrayer(PrayerName),

    /// A time string was not a 24-hour `HH:MM` value.
    #[error("Invalid time for {prayer}: '{value}' (expected 24-hour HH:MM)")]
    InvalidTime { prayer: PrayerName, value: String },
}
