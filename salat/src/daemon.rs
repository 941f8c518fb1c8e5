//! Adhan tick daemon.
//!
//! Drives a [`PrayerController`] from a tokio interval and forwards every
//! [`Announcement`] over an mpsc channel to whatever plays the audio or
//! raises the notification.
//!
//! # Example
//!
//! ```ignore
//! use salat::daemon::AdhanDaemon;
//!
//! let (tx, mut rx) = tokio::sync::mpsc::channel(8);
//! let daemon = AdhanDaemon::new(controller, Arc::new(SystemClock), tx);
//! tokio::spawn(daemon.run(shutdown.clone()));
//!
//! while let Some(announcement) = rx.recv().await {
//!     println!("{announcement}");
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::adhan::Announcement;
use crate::controller::PrayerController;
use crate::time::Clock;

/// Default interval between ticks (1 second).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background loop that evaluates the Adhan trigger once per tick.
pub struct AdhanDaemon {
    controller: PrayerController,
    clock: Arc<dyn Clock>,
    announcements: mpsc::Sender<Announcement>,
    tick_interval: Duration,
    stale_warned_for: Option<NaiveDate>,
}

impl AdhanDaemon {
    pub fn new(
        controller: PrayerController,
        clock: Arc<dyn Clock>,
        announcements: mpsc::Sender<Announcement>,
    ) -> Self {
        Self {
            controller,
            clock,
            announcements,
            tick_interval: DEFAULT_TICK_INTERVAL,
            stale_warned_for: None,
        }
    }

    /// Sets a custom tick interval. Zero is raised to one millisecond.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Duration::from_millis(1));
        self
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Runs until `shutdown` is cancelled or the announcement receiver is
    /// dropped, then hands the controller back.
    pub async fn run(mut self, shutdown: CancellationToken) -> PrayerController {
        info!(
            tick_interval_ms = self.tick_interval.as_millis() as u64,
            "Adhan daemon starting"
        );

        let mut interval = tokio::time::interval(self.tick_interval);
        // A late tick only needs the current second, not a burst of old ones
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("Adhan daemon shutting down");
                    break;
                }

                _ = self.announcements.closed() => {
                    info!("Announcement receiver closed, stopping Adhan daemon");
                    break;
                }

                _ = interval.tick() => {
                    if !self.tick(&shutdown).await {
                        break;
                    }
                }
            }
        }

        self.controller
    }

    /// One tick. Returns false when the daemon should stop: the announcement
    /// channel is gone, or `shutdown` fired while a send was waiting for room.
    async fn tick(&mut self, shutdown: &CancellationToken) -> bool {
        let now = self.clock.now();
        let today = now.date();

        if self.controller.needs_refresh(today) && self.stale_warned_for != Some(today) {
            warn!(
                schedule_date = ?self.controller.schedule().date(),
                %today,
                "Prayer schedule is from another day; times may be off"
            );
            self.stale_warned_for = Some(today);
        }

        let report = self.controller.tick(now);
        let Some(announcement) = report.announcement else {
            return true;
        };

        let prayer = announcement.prayer;
        debug!(%prayer, at = %now, "Sending announcement");

        // A full channel must not hold off cancellation
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                warn!(%prayer, "Adhan daemon shutting down with announcement undelivered");
                false
            }

            sent = self.announcements.send(announcement) => {
                if sent.is_err() {
                    warn!("Announcement receiver dropped");
                    return false;
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::NoOpLogger;
    use crate::schedule::{PrayerName, PrayerSchedule};
    use crate::time::FixedClock;
    use chrono::{NaiveDate, NaiveDateTime};

    fn schedule() -> PrayerSchedule {
        PrayerSchedule::from_timings([
            ("Fajr", "05:00"),
            ("Dhuhr", "13:00"),
            ("Asr", "16:30"),
            ("Maghrib", "19:00"),
            ("Isha", "20:30"),
        ])
        .unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn daemon(clock: &FixedClock) -> (AdhanDaemon, mpsc::Receiver<Announcement>) {
        let (tx, rx) = mpsc::channel(4);
        let controller = PrayerController::new(schedule(), Arc::new(NoOpLogger));
        (AdhanDaemon::new(controller, Arc::new(clock.clone()), tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_forwards_announcement() {
        let clock = FixedClock::new(at(4, 59, 59));
        let (daemon, mut rx) = daemon(&clock);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(daemon.run(shutdown.clone()));

        clock.set(at(5, 0, 0));
        let announcement = rx.recv().await.expect("announcement");
        assert_eq!(announcement.prayer, PrayerName::Fajr);
        assert_eq!(announcement.title(), "Time for Fajr prayer");

        shutdown.cancel();
        let controller = handle.await.unwrap();
        assert!(controller.trigger_state().has_fired(PrayerName::Fajr));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_cancellation() {
        let clock = FixedClock::new(at(10, 0, 0));
        let (daemon, _rx) = daemon(&clock);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(daemon.run(shutdown.clone()));

        tokio::time::sleep(Duration::from_secs(5)).await;
        shutdown.cancel();

        let controller = handle.await.unwrap();
        assert_eq!(controller.trigger_state().fired().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let clock = FixedClock::new(at(10, 0, 0));
        let (daemon, rx) = daemon(&clock);
        drop(rx);

        // Returns without any cancellation
        let controller = daemon.run(CancellationToken::new()).await;
        assert_eq!(controller.trigger_state().fired().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_does_not_repeat_within_a_day() {
        let clock = FixedClock::new(at(13, 0, 0));
        let (daemon, mut rx) = daemon(&clock);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(daemon.run(shutdown.clone()));

        assert_eq!(rx.recv().await.unwrap().prayer, PrayerName::Dhuhr);

        // Clock stays on 13:00:00 for many ticks
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_with_full_channel() {
        let clock = FixedClock::new(at(5, 0, 0));
        let (tx, _rx) = mpsc::channel(1);
        let controller = PrayerController::new(schedule(), Arc::new(NoOpLogger));
        let daemon = AdhanDaemon::new(controller, Arc::new(clock.clone()), tx);
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(daemon.run(shutdown.clone()));

        // Fajr fills the only slot; nobody reads it
        tokio::time::sleep(Duration::from_secs(2)).await;
        // Dhuhr's send now waits for room
        clock.set(at(13, 0, 0));
        tokio::time::sleep(Duration::from_secs(2)).await;

        shutdown.cancel();
        let controller = tokio::time::timeout(Duration::from_secs(30), handle)
            .await
            .expect("daemon ignored cancellation")
            .unwrap();
        assert!(controller.trigger_state().has_fired(PrayerName::Fajr));
        assert!(controller.trigger_state().has_fired(PrayerName::Dhuhr));
    }

    #[test]
    fn test_tick_interval_floor() {
        let clock = FixedClock::new(at(0, 0, 0));
        let (daemon, _rx) = daemon(&clock);
        let daemon = daemon.with_tick_interval(Duration::ZERO);
        assert_eq!(daemon.tick_interval(), Duration::from_millis(1));
    }
}
