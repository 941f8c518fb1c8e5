//! Announcement payload for audio and notification collaborators.

use std::fmt;

use chrono::NaiveTime;

use crate::schedule::{PrayerName, PrayerSchedule};

/// Everything a host needs to sound the Adhan and raise a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub prayer: PrayerName,
    /// Adhan time from the schedule
    pub adhan: NaiveTime,
    /// Start of the congregational prayer
    pub iqamah: NaiveTime,
    /// Minutes between Adhan and Iqamah
    pub iqamah_offset_minutes: u32,
}

impl Announcement {
    /// Builds the announcement for a prayer that just fired.
    pub fn new(prayer: PrayerName, schedule: &PrayerSchedule, iqamah_offset_minutes: u32) -> Self {
        Self {
            prayer,
            adhan: schedule.time(prayer),
            iqamah: schedule.iqamah_time(prayer, iqamah_offset_minutes),
            iqamah_offset_minutes,
        }
    }

    /// Notification title, e.g. "Time for Fajr prayer".
    pub fn title(&self) -> String {
        format!("Time for {} prayer", self.prayer)
    }

    /// Notification body, e.g. "Iqamah in 10 minutes".
    pub fn body(&self) -> String {
        match self.iqamah_offset_minutes {
            1 => "Iqamah in 1 minute".to_string(),
            n => format!("Iqamah in {} minutes", n),
        }
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} at {}",
            self.title(),
            self.adhan.format("%H:%M"),
            self.body(),
            self.iqamah.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn schedule() -> PrayerSchedule {
        PrayerSchedule::new([hm(5, 0), hm(13, 0), hm(16, 30), hm(19, 0), hm(20, 30)])
    }

    #[test]
    fn test_announcement_text() {
        let announcement = Announcement::new(PrayerName::Fajr, &schedule(), 10);
        assert_eq!(announcement.title(), "Time for Fajr prayer");
        assert_eq!(announcement.body(), "Iqamah in 10 minutes");
        assert_eq!(announcement.adhan, hm(5, 0));
        assert_eq!(announcement.iqamah, hm(5, 10));
    }

    #[test]
    fn test_singular_minute() {
        let announcement = Announcement::new(PrayerName::Asr, &schedule(), 1);
        assert_eq!(announcement.body(), "Iqamah in 1 minute");
    }

    #[test]
    fn test_display() {
        let announcement = Announcement::new(PrayerName::Maghrib, &schedule(), 5);
        assert_eq!(
            announcement.to_string(),
            "Time for Maghrib prayer (19:00) - Iqamah in 5 minutes at 19:05"
        );
    }
}
