//! Prayer-times provider adapter.
//!
//! Builds the request URL for the AlAdhan timings endpoint and decodes its
//! JSON payload into a [`PrayerSchedule`]. The HTTP round trip itself is
//! left to the host.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::coord::GeoCoordinate;
use crate::schedule::{PrayerSchedule, ScheduleParseError};

/// Public AlAdhan API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.aladhan.com/v1";

/// Calculation method 1: University of Islamic Sciences, Karachi.
pub const DEFAULT_METHOD: u8 = 1;

/// Asr juristic school 0: Shafi'i (1 is Hanafi).
pub const DEFAULT_SCHOOL: u8 = 0;

/// Errors decoding a timings payload.
#[derive(Debug, Error)]
pub enum TimingsError {
    /// Payload was not the expected JSON shape
    #[error("Invalid timings payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider answered with a non-success code
    #[error("Timings provider returned {code}: {status}")]
    Api { code: u16, status: String },

    /// Timings were present but incomplete or malformed
    #[error(transparent)]
    Schedule(#[from] ScheduleParseError),

    /// Failed to read a saved payload
    #[error("Failed to read timings file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parameters of one daily timings request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingsRequest {
    pub coordinate: GeoCoordinate,
    pub date: NaiveDate,
    pub method: u8,
    pub school: u8,
}

impl TimingsRequest {
    /// Request for `date` at `coordinate` with the default method and school.
    pub fn new(coordinate: GeoCoordinate, date: NaiveDate) -> Self {
        Self {
            coordinate,
            date,
            method: DEFAULT_METHOD,
            school: DEFAULT_SCHOOL,
        }
    }

    /// Sets the calculation method.
    pub fn with_method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }

    /// Sets the Asr juristic school.
    pub fn with_school(mut self, school: u8) -> Self {
        self.school = school;
        self
    }

    /// Full request URL under `api_base`.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use salat::coord::GeoCoordinate;
    /// use salat::timings::{TimingsRequest, DEFAULT_API_BASE};
    ///
    /// let request = TimingsRequest::new(
    ///     GeoCoordinate::new(6.5244, 3.3792),
    ///     NaiveDate::from_ymd_opt(2026, 3, 7).unwrap(),
    /// );
    /// assert_eq!(
    ///     request.url(DEFAULT_API_BASE),
    ///     "https://api.aladhan.com/v1/timings?latitude=6.5244&longitude=3.3792&method=1&school=0&date=07-03-2026"
    /// );
    /// ```
    pub fn url(&self, api_base: &str) -> String {
        format!(
            "{}/timings?latitude={}&longitude={}&method={}&school={}&date={}",
            api_base.trim_end_matches('/'),
            self.coordinate.latitude,
            self.coordinate.longitude,
            self.method,
            self.school,
            self.date.format("%d-%m-%Y")
        )
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    status: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct EnvelopeData {
    timings: HashMap<String, String>,
    date: Option<EnvelopeDate>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeDate {
    gregorian: Option<GregorianDate>,
}

#[derive(Debug, Deserialize)]
struct GregorianDate {
    date: String,
}

/// Decodes a full provider response.
///
/// The schedule is tagged with the Gregorian date the provider reports,
/// when it reports one in `DD-MM-YYYY` form.
pub fn parse_response(json: &str) -> Result<PrayerSchedule, TimingsError> {
    let envelope: Envelope = serde_json::from_str(json)?;

    // Error responses carry a message string in `data`
    if envelope.code != 200 {
        return Err(TimingsError::Api {
            code: envelope.code,
            status: envelope.status,
        });
    }
    let data: EnvelopeData = serde_json::from_value(envelope.data)?;

    let schedule = PrayerSchedule::from_timings(&data.timings)?;

    let date = data
        .date
        .and_then(|d| d.gregorian)
        .and_then(|g| NaiveDate::parse_from_str(&g.date, "%d-%m-%Y").ok());

    debug!(date = ?date, "Decoded timings response");

    Ok(match date {
        Some(date) => schedule.with_date(date),
        None => schedule,
    })
}

/// Decodes a bare `{"Fajr": "05:00", ...}` object.
pub fn parse_timings(json: &str) -> Result<PrayerSchedule, TimingsError> {
    let timings: HashMap<String, String> = serde_json::from_str(json)?;
    Ok(PrayerSchedule::from_timings(&timings)?)
}

/// Decodes either a full provider response or a bare timings object.
pub fn parse_any(json: &str) -> Result<PrayerSchedule, TimingsError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("data").is_some() || value.get("code").is_some() {
        parse_response(json)
    } else {
        parse_timings(json)
    }
}

/// Loads a saved payload from disk. See [`parse_any`].
pub fn load_file(path: &Path) -> Result<PrayerSchedule, TimingsError> {
    let json = std::fs::read_to_string(path)?;
    parse_any(&json)
}
