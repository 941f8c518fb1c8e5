//! Once-per-prayer-per-day trigger evaluation.

use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::schedule::{PrayerName, PrayerSchedule};

/// Largest supported catch-up window.
pub const MAX_MATCH_WINDOW_SECS: u64 = 59;

/// "Already announced today" flags for the five prayers.
///
/// Owned by a single driver and replaced wholesale by [`evaluate`], so no
/// caller ever sees a half-reset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerState {
    day: Option<NaiveDate>,
    fired: [bool; 5],
    last_fire: Option<NaiveDateTime>,
}

impl TriggerState {
    /// Fresh state with no day and nothing fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// The calendar day the flags belong to.
    pub fn day(&self) -> Option<NaiveDate> {
        self.day
    }

    /// Whether `prayer` has already been announced on [`TriggerState::day`].
    pub fn has_fired(&self, prayer: PrayerName) -> bool {
        self.fired[prayer.index()]
    }

    /// Prayers announced so far today, in daily order.
    pub fn fired(&self) -> impl Iterator<Item = PrayerName> + '_ {
        PrayerName::ALL
            .into_iter()
            .filter(move |p| self.has_fired(*p))
    }

    /// Flags cleared for `day` when the stored day differs.
    fn rolled_to(self, day: NaiveDate) -> Self {
        if self.day == Some(day) {
            self
        } else {
            Self {
                day: Some(day),
                fired: [false; 5],
                last_fire: None,
            }
        }
    }
}

/// How closely `now` must match a prayer time to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerPolicy {
    match_window: Duration,
}

impl TriggerPolicy {
    /// Fire only when `now` is exactly the prayer's second.
    pub fn exact() -> Self {
        Self::default()
    }

    /// Also fire up to `window` after the prayer's second, so a host whose
    /// tick skipped that second still announces. Clamped to
    /// [`MAX_MATCH_WINDOW_SECS`].
    pub fn with_match_window(window: Duration) -> Self {
        Self {
            match_window: window.min(Duration::from_secs(MAX_MATCH_WINDOW_SECS)),
        }
    }

    /// The configured catch-up window.
    pub fn match_window(&self) -> Duration {
        self.match_window
    }

    /// Whether whole-second `now` falls inside `[start, start + window]`.
    fn matches(&self, start: NaiveDateTime, now: NaiveDateTime) -> bool {
        match (now - start).to_std() {
            Ok(elapsed) => elapsed <= self.match_window,
            Err(_) => false,
        }
    }

    /// Evaluates the trigger under this policy. See [`evaluate`].
    pub fn evaluate(
        &self,
        state: TriggerState,
        schedule: &PrayerSchedule,
        now: NaiveDateTime,
    ) -> (TriggerState, Option<PrayerName>) {
        let now = truncate_to_second(now);
        let today = now.date();
        let mut state = state.rolled_to(today);

        // Something already fired during this second
        if state.last_fire == Some(now) {
            return (state, None);
        }

        let due = PrayerName::ALL.into_iter().find(|&prayer| {
            !state.has_fired(prayer) && self.matches(schedule.at(prayer, today), now)
        });

        if let Some(prayer) = due {
            state.fired[prayer.index()] = true;
            state.last_fire = Some(now);
        }

        (state, due)
    }
}

/// Decides whether a prayer's Adhan should fire at `now`.
///
/// 1. If `now` falls on a different calendar day than `state`, every flag
///    is cleared and the new day stored.
/// 2. The first prayer in daily order whose time equals `now` (to the
///    second) and has not yet fired is marked and returned.
///
/// At most one prayer fires per call, and at most one per second: repeated
/// calls within the same second return `None`. If two prayers share a time
/// only the first fires; the second waits for a later matching second,
/// which under exact matching never comes that day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use salat::adhan::{evaluate, TriggerState};
/// use salat::schedule::{PrayerName, PrayerSchedule};
///
/// let schedule = PrayerSchedule::from_timings([
///     ("Fajr", "05:00"), ("Dhuhr", "13:00"), ("Asr", "16:30"),
///     ("Maghrib", "19:00"), ("Isha", "20:30"),
/// ]).unwrap();
/// let now = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_opt(5, 0, 0).unwrap();
///
/// let (state, fired) = evaluate(TriggerState::new(), &schedule, now);
/// assert_eq!(fired, Some(PrayerName::Fajr));
///
/// let (_, fired) = evaluate(state, &schedule, now);
/// assert_eq!(fired, None);
/// ```
pub fn evaluate(
    state: TriggerState,
    schedule: &PrayerSchedule,
    now: NaiveDateTime,
) -> (TriggerState, Option<PrayerName>) {
    TriggerPolicy::exact().evaluate(state, schedule, now)
}

fn truncate_to_second(now: NaiveDateTime) -> NaiveDateTime {
    now.with_nanosecond(0).unwrap_or(now)
}
