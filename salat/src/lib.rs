//! Salat - prayer times, Adhan triggering and qibla direction
//!
//! The core is a set of small, synchronous, pure functions over explicit
//! state values:
//!
//! - [`schedule`]: today's five prayer times, and which one is active
//! - [`adhan`]: fire each prayer's Adhan exactly once per day
//! - [`qibla`]: great-circle bearing to the Kaaba and compass smoothing
//!
//! Around it sit the pieces a host needs to run them: [`timings`] for the
//! prayer-times provider payload, [`config`] for `~/.salat/config.ini`,
//! [`controller`] to own the state between ticks, and [`daemon`] for a
//! tokio tick loop.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use salat::schedule::{query, PrayerName, PrayerSchedule};
//!
//! let schedule = PrayerSchedule::from_timings([
//!     ("Fajr", "05:00"), ("Dhuhr", "13:00"), ("Asr", "16:30"),
//!     ("Maghrib", "19:00"), ("Isha", "20:30"),
//! ])?;
//!
//! let now = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(21, 0, 0).unwrap();
//! let q = query(&schedule, now);
//! assert_eq!(q.active, Some(PrayerName::Isha));
//! assert_eq!(q.next, PrayerName::Fajr);
//! # Ok::<(), salat::schedule::ScheduleParseError>(())
//! ```

pub mod adhan;
pub mod config;
pub mod controller;
pub mod coord;
pub mod daemon;
pub mod log;
pub mod logging;
pub mod qibla;
pub mod schedule;
pub mod time;
pub mod timings;

/// Version of the salat library and CLI.
///
/// Synchronized across the workspace from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION.split('.').count(), 3);
    }
}
