//! Times command - prayer table with Iqamah times and countdown.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;
use salat::schedule::{query, PrayerSchedule};
use salat::time::{Clock, SystemClock};

use super::common::{load_schedule, parse_datetime, resolve_location};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the times command.
#[derive(Debug, Args)]
pub struct TimesArgs {
    /// Provider response or bare {"Fajr": "05:00", ...} JSON file
    #[arg(long)]
    pub timings: PathBuf,

    /// Evaluate at this local time ("YYYY-MM-DD HH:MM:SS") instead of now
    #[arg(long)]
    pub at: Option<String>,
}

/// Run the times command.
pub fn run(args: TimesArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("times");
    let config = runner.config();

    let schedule = load_schedule(&args.timings)?;
    let now = match args.at.as_deref() {
        Some(value) => parse_datetime(value)?,
        None => SystemClock.now(),
    };

    if schedule.is_stale(now.date()) {
        tracing::warn!(schedule_date = ?schedule.date(), today = %now.date(), "Timings file is for another day");
    }
    if !schedule.is_chronological() {
        tracing::warn!("Prayer times are not in daily order");
    }

    let label = resolve_location(None, None, config)?.describe();
    let marker = if atty::is(atty::Stream::Stdout) {
        Marker::Color
    } else {
        Marker::Plain
    };

    print!(
        "{}",
        render_table(
            &schedule,
            now,
            config.timings.iqamah_offset_minutes,
            &label,
            marker
        )
    );
    Ok(())
}

/// How the highlighted row is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// `>` prefix only
    Plain,
    /// `>` prefix and bold ANSI text
    Color,
}

fn render_table(
    schedule: &PrayerSchedule,
    now: NaiveDateTime,
    iqamah_offset_minutes: u32,
    label: &str,
    marker: Marker,
) -> String {
    let q = query(schedule, now);
    let highlighted = q.highlighted();

    let mut out = format!("Prayer times for {}\n", label);
    match schedule.date() {
        Some(date) => out.push_str(&format!("Date: {}\n\n", date.format("%Y-%m-%d"))),
        None => out.push('\n'),
    }
    out.push_str("  Prayer    Adhan  Iqamah\n");

    for (prayer, time) in schedule.iter() {
        let iqamah = schedule.iqamah_time(prayer, iqamah_offset_minutes);
        let row = format!(
            "{:<8}  {}  {}",
            prayer.as_str(),
            time.format("%H:%M"),
            iqamah.format("%H:%M")
        );
        if prayer == highlighted {
            match marker {
                Marker::Plain => out.push_str(&format!("> {}\n", row)),
                Marker::Color => out.push_str(&format!("> \x1b[1m{}\x1b[0m\n", row)),
            }
        } else {
            out.push_str(&format!("  {}\n", row));
        }
    }

    out.push('\n');
    out.push_str(&format!("{}\n", q));
    out
}
