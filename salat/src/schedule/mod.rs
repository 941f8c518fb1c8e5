//! Daily prayer schedule model.
//!
//! A [`PrayerSchedule`] holds the five prayer times for one calendar day.
//! [`query`] answers, for any instant, which prayer is active, which comes
//! next, and how long until it starts.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use salat::schedule::{query, PrayerName, PrayerSchedule};
//!
//! let schedule = PrayerSchedule::from_timings([
//!     ("Fajr", "05:00"),
//!     ("Dhuhr", "13:00"),
//!     ("Asr", "16:30"),
//!     ("Maghrib", "19:00"),
//!     ("Isha", "20:30"),
//! ])
//! .unwrap();
//!
//! let now = NaiveDate::from_ymd_opt(2026, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(21, 0, 0)
//!     .unwrap();
//! let result = query(&schedule, now);
//!
//! assert_eq!(result.active, Some(PrayerName::Isha));
//! assert_eq!(result.next, PrayerName::Fajr);
//! assert_eq!(result.remaining.as_secs(), 8 * 3600);
//! ```

mod error;
mod prayer;
mod query;
mod schedule;


pub use error::ScheduleParseError;
pub use prayer::PrayerName;
pub use query::{query, Countdown, ScheduleQuery};
pub use schedule::{parse_time_of_day, PrayerSchedule, DEFAULT_IQAMAH_OFFSET_MINUTES};
