//! Url command - print the prayer-times provider request.

use chrono::{Local, NaiveDate};
use clap::Args;

use super::common::resolve_location;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the url command.
#[derive(Debug, Args)]
pub struct UrlArgs {
    /// Latitude in decimal degrees (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Calendar day as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Run the url command.
pub fn run(args: UrlArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("url");
    let config = runner.config();

    let location = resolve_location(args.lat, args.lon, config)?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => Local::now().date_naive(),
    };

    let url = config
        .timings
        .request(location.coordinate, date)
        .url(&config.timings.api_base);
    tracing::debug!(%url, "Built timings request");
    println!("{}", url);

    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::InvalidArgument(format!("'{}' is not a date like '2024-03-15'", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert!(parse_date("15-03-2024").is_err());
    }
}
