//! Host-side owners of the prayer and compass state.
//!
//! The domain functions in [`crate::schedule`], [`crate::adhan`] and
//! [`crate::qibla`] are pure and take their state by value. The controllers
//! here hold that state between ticks so a host only has to feed them the
//! clock and the compass samples. Both take `&mut self` on every update,
//! so the same state can never be driven from two places at once.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::adhan::{Announcement, TriggerPolicy, TriggerState};
use crate::config::ConfigFile;
use crate::coord::GeoCoordinate;
use crate::log::Logger;
use crate::qibla::{distance_km, needle_target, qibla_bearing, HeadingState, SmoothingFactor};
use crate::schedule::{query, PrayerSchedule, ScheduleQuery, DEFAULT_IQAMAH_OFFSET_MINUTES};
use crate::{log_debug, log_info, log_warn};

/// Result of one schedule tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Active prayer, next prayer and countdown at the tick instant
    pub query: ScheduleQuery,
    /// Present when a prayer's Adhan fired on this tick
    pub announcement: Option<Announcement>,
}

/// Owns today's [`PrayerSchedule`] and the Adhan [`TriggerState`].
pub struct PrayerController {
    schedule: PrayerSchedule,
    trigger: TriggerState,
    policy: TriggerPolicy,
    iqamah_offset_minutes: u32,
    adhan_enabled: bool,
    logger: Arc<dyn Logger>,
}

impl PrayerController {
    /// Controller with exact-second matching and the default Iqamah offset.
    pub fn new(schedule: PrayerSchedule, logger: Arc<dyn Logger>) -> Self {
        warn_if_unordered(&schedule, logger.as_ref());
        Self {
            schedule,
            trigger: TriggerState::new(),
            policy: TriggerPolicy::exact(),
            iqamah_offset_minutes: DEFAULT_IQAMAH_OFFSET_MINUTES,
            adhan_enabled: true,
            logger,
        }
    }

    /// Controller set up from the `[timings]` and `[adhan]` sections.
    pub fn from_config(
        schedule: PrayerSchedule,
        config: &ConfigFile,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self::new(schedule, logger)
            .with_policy(config.adhan.policy())
            .with_iqamah_offset(config.timings.iqamah_offset_minutes)
            .with_adhan_enabled(config.adhan.enabled)
    }

    pub fn with_policy(mut self, policy: TriggerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_iqamah_offset(mut self, minutes: u32) -> Self {
        self.iqamah_offset_minutes = minutes;
        self
    }

    /// When disabled, ticks still report the countdown but never announce.
    pub fn with_adhan_enabled(mut self, enabled: bool) -> Self {
        self.adhan_enabled = enabled;
        self
    }

    pub fn schedule(&self) -> &PrayerSchedule {
        &self.schedule
    }

    pub fn trigger_state(&self) -> TriggerState {
        self.trigger
    }

    pub fn iqamah_offset_minutes(&self) -> u32 {
        self.iqamah_offset_minutes
    }

    /// Swaps in a freshly fetched schedule.
    ///
    /// Fired flags are kept: they belong to the calendar day, not to the
    /// schedule, so a prayer announced before a mid-day refresh is not
    /// announced again.
    pub fn replace_schedule(&mut self, schedule: PrayerSchedule) {
        warn_if_unordered(&schedule, self.logger.as_ref());
        log_info!(
            self.logger,
            "Prayer schedule replaced (date: {})",
            schedule
                .date()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "untagged".to_string())
        );
        self.schedule = schedule;
    }

    /// Whether the held schedule was fetched for a day other than `today`.
    pub fn needs_refresh(&self, today: NaiveDate) -> bool {
        self.schedule.is_stale(today)
    }

    /// Queries the schedule and evaluates the Adhan trigger at `now`.
    pub fn tick(&mut self, now: NaiveDateTime) -> TickReport {
        let query = query(&self.schedule, now);

        let announcement = if self.adhan_enabled {
            let previous_day = self.trigger.day();
            let (trigger, fired) = self.policy.evaluate(self.trigger, &self.schedule, now);
            self.trigger = trigger;

            if previous_day.is_some() && previous_day != trigger.day() {
                log_debug!(self.logger, "Adhan flags reset for {}", now.date());
            }

            fired.map(|prayer| {
                let announcement =
                    Announcement::new(prayer, &self.schedule, self.iqamah_offset_minutes);
                log_info!(self.logger, "{}", announcement);
                announcement
            })
        } else {
            None
        };

        TickReport {
            query,
            announcement,
        }
    }
}

fn warn_if_unordered(schedule: &PrayerSchedule, logger: &dyn Logger) {
    if !schedule.is_chronological() {
        log_warn!(
            logger,
            "Prayer times are not in daily order; active-prayer lookup may be wrong"
        );
    }
}

/// Owns the compass [`HeadingState`] for one observer location.
#[derive(Debug, Clone)]
pub struct CompassController {
    location: GeoCoordinate,
    qibla: f64,
    state: HeadingState,
    smoothing: SmoothingFactor,
}

impl CompassController {
    pub fn new(location: GeoCoordinate, smoothing: SmoothingFactor) -> Self {
        Self {
            location,
            qibla: qibla_bearing(location),
            state: HeadingState::default(),
            smoothing,
        }
    }

    /// Moves the observer. The needle keeps its current angle.
    pub fn set_location(&mut self, location: GeoCoordinate) {
        self.location = location;
        self.qibla = qibla_bearing(location);
    }

    pub fn location(&self) -> GeoCoordinate {
        self.location
    }

    /// True bearing to the Kaaba, degrees clockwise from north.
    pub fn qibla_bearing(&self) -> f64 {
        self.qibla
    }

    /// Great-circle distance to the Kaaba in kilometres.
    pub fn distance_km(&self) -> f64 {
        distance_km(self.location, crate::coord::KAABA)
    }

    pub fn state(&self) -> HeadingState {
        self.state
    }

    /// Records a device orientation sample.
    pub fn observe(&mut self, raw_device_heading: f64) {
        self.state = self.state.observe(raw_device_heading);
    }

    /// Where the needle is heading, relative to the device.
    pub fn target(&self) -> f64 {
        needle_target(self.qibla, self.state.raw_device_heading)
    }

    /// Advances one animation frame and returns the needle angle in [0, 360).
    pub fn frame(&mut self) -> f64 {
        self.state = self.state.tick(self.target(), self.smoothing);
        self.state.display_degrees()
    }
}
