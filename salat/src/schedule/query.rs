//! Active / next prayer resolution.

use std::fmt;
use std::time::Duration;

use chrono::{Days, NaiveDateTime};

use super::{PrayerName, PrayerSchedule};

/// Where `now` falls within a day's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleQuery {
    /// Last prayer whose time has been reached today; `None` before Fajr.
    pub active: Option<PrayerName>,
    /// First prayer still to come; tomorrow's Fajr once Isha has begun.
    pub next: PrayerName,
    /// Time until `next` starts.
    pub remaining: Duration,
}

impl ScheduleQuery {
    /// The prayer a display should mark as current.
    ///
    /// Between midnight and Fajr no prayer of the new day has started, so
    /// the previous night's Isha is still the one on the board.
    pub fn highlighted(&self) -> PrayerName {
        self.active.unwrap_or(PrayerName::Isha)
    }

    /// `remaining` broken into hours, minutes and seconds.
    pub fn countdown(&self) -> Countdown {
        Countdown::from(self.remaining)
    }
}

impl fmt::Display for ScheduleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Next: {} in {}", self.next, self.countdown())
    }
}

/// A duration split for display as `"{h}h {m}m {s}s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl From<Duration> for Countdown {
    fn from(duration: Duration) -> Self {
        let total = duration.as_secs();
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Resolves the active and next prayer at `now`.
///
/// The lower bound is inclusive: at exactly a prayer's time that prayer is
/// active and the countdown targets the one after it. After Isha the next
/// prayer is Fajr on the following calendar day, and `remaining` is measured
/// against that instant.
pub fn query(schedule: &PrayerSchedule, now: NaiveDateTime) -> ScheduleQuery {
    let today = now.date();

    let mut active = None;
    let mut next = None;
    for (prayer, time) in schedule.iter() {
        let start = today.and_time(time);
        if start <= now {
            active = Some(prayer);
        } else if next.is_none() {
            next = Some((prayer, start));
        }
    }

    let (next, next_start) = next.unwrap_or_else(|| {
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        (PrayerName::Fajr, schedule.at(PrayerName::Fajr, tomorrow))
    });

    // A non-chronological schedule can put next_start before now; clamp
    let remaining = (next_start - now).to_std().unwrap_or(Duration::ZERO);

    ScheduleQuery {
        active,
        next,
        remaining,
    }
}
