//! The five daily prayers.

use std::fmt;
use std::str::FromStr;

/// One of the five daily prayers, ordered by their place in the day.
///
/// The derived `Ord` follows the daily sequence, so
/// `PrayerName::Fajr < PrayerName::Isha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All prayers in daily order.
    pub const ALL: [PrayerName; 5] = [
        PrayerName::Fajr,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    /// Position in the daily sequence (Fajr = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The prayer after this one, wrapping from Isha to Fajr.
    pub fn next(self) -> PrayerName {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The key used by the timings provider (e.g. "Fajr").
    pub fn as_str(self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "dhuhr" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(format!("Unknown prayer: '{}'", s)),
        }
    }
}
