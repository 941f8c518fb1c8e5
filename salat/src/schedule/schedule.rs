//! Prayer schedule construction and lookup.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::{PrayerName, ScheduleParseError};

/// Minutes between the Adhan and the Iqamah.
pub const DEFAULT_IQAMAH_OFFSET_MINUTES: u32 = 10;

/// The five prayer times for a single calendar day.
///
/// Times are assumed to increase in daily order (Fajr first, Isha last).
/// The schedule does not enforce this; an out-of-order provider payload is
/// an upstream data error. Hosts may check [`PrayerSchedule::is_chronological`]
/// and log a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSchedule {
    times: [NaiveTime; 5],
    date: Option<NaiveDate>,
}

impl PrayerSchedule {
    /// Creates a schedule from times in daily order.
    pub fn new(times: [NaiveTime; 5]) -> Self {
        Self { times, date: None }
    }

    /// Builds a schedule from raw `(name, "HH:MM")` pairs.
    ///
    /// Names are matched case-insensitively against the five prayers; other
    /// keys the provider sends (Sunrise, Imsak, Midnight, ...) are ignored.
    /// Values may carry a trailing annotation after whitespace, such as
    /// `"05:12 (WAT)"`.
    ///
    /// # Errors
    ///
    /// [`ScheduleParseError::MissingPrayer`] when a prayer has no entry and
    /// [`ScheduleParseError::InvalidTime`] when a value does not parse.
    pub fn from_timings<I, K, V>(timings: I) -> Result<Self, ScheduleParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw: [Option<String>; 5] = Default::default();
        for (key, value) in timings {
            if let Ok(prayer) = key.as_ref().parse::<PrayerName>() {
                raw[prayer.index()] = Some(value.as_ref().to_string());
            }
        }

        let mut times = [NaiveTime::default(); 5];
        for prayer in PrayerName::ALL {
            let value = raw[prayer.index()]
                .as_deref()
                .ok_or(ScheduleParseError::MissingPrayer(prayer))?;
            times[prayer.index()] =
                parse_time_of_day(value).ok_or_else(|| ScheduleParseError::InvalidTime {
                    prayer,
                    value: value.to_string(),
                })?;
        }

        Ok(Self::new(times))
    }

    /// Tags the schedule with the calendar day it was fetched for.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The calendar day this schedule belongs to, if known.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// True when the schedule is tagged with a day other than `today`.
    ///
    /// Untagged schedules are never considered stale.
    pub fn is_stale(&self, today: NaiveDate) -> bool {
        self.date.is_some_and(|date| date != today)
    }

    /// Time of day for a prayer.
    #[inline]
    pub fn time(&self, prayer: PrayerName) -> NaiveTime {
        self.times[prayer.index()]
    }

    /// The prayer's start on a given calendar day.
    #[inline]
    pub fn at(&self, prayer: PrayerName, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.time(prayer))
    }

    /// Iterates `(prayer, time)` pairs in daily order.
    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, NaiveTime)> + '_ {
        PrayerName::ALL.into_iter().map(|p| (p, self.time(p)))
    }

    /// True when every prayer starts strictly after the one before it.
    pub fn is_chronological(&self) -> bool {
        self.times.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Iqamah time: the Adhan time plus `offset_minutes`, wrapping past
    /// midnight.
    pub fn iqamah_time(&self, prayer: PrayerName, offset_minutes: u32) -> NaiveTime {
        let (time, _) = self
            .time(prayer)
            .overflowing_add_signed(Duration::minutes(i64::from(offset_minutes)));
        time
    }
}

/// Parses a 24-hour `HH:MM` time, ignoring anything after the first
/// whitespace.
///
/// Returns `None` for anything that is not two zero-padded digit pairs
/// naming a valid time of day.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use salat::schedule::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("05:12"), NaiveTime::from_hms_opt(5, 12, 0));
/// assert_eq!(parse_time_of_day("05:12 (WAT)"), NaiveTime::from_hms_opt(5, 12, 0));
/// assert_eq!(parse_time_of_day("5:12pm"), None);
/// ```
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let token = value.split_whitespace().next()?;
    let (hours, minutes) = token.split_once(':')?;

    let is_two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
    if !is_two_digits(hours) || !is_two_digits(minutes) {
        return None;
    }

    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}
