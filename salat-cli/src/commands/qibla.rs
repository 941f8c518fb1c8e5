//! Qibla command - bearing to the Kaaba and a compass needle trace.

use clap::Args;
use salat::controller::CompassController;
use salat::qibla::{normalize_degrees, SmoothingFactor};

use super::common::{resolve_location, Location};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the qibla command.
#[derive(Debug, Args)]
pub struct QiblaArgs {
    /// Latitude in decimal degrees (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Device heading in degrees from north, as a compass would report it
    #[arg(long, allow_hyphen_values = true)]
    pub heading: Option<f64>,

    /// Animate the needle for this many frames from rest and print each angle
    #[arg(long, default_value = "0")]
    pub frames: usize,
}

/// Run the qibla command.
pub fn run(args: QiblaArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("qibla");
    let config = runner.config();

    let location = resolve_location(args.lat, args.lon, config)?;
    if let Some(heading) = args.heading {
        if !heading.is_finite() {
            return Err(CliError::InvalidArgument(format!(
                "heading must be a finite number of degrees, got {}",
                heading
            )));
        }
    }

    let mut compass = CompassController::new(location.coordinate, config.compass.smoothing());
    compass.observe(args.heading.unwrap_or(0.0));

    tracing::info!(
        bearing = compass.qibla_bearing(),
        distance_km = compass.distance_km(),
        "Computed qibla"
    );
    print!("{}", render_summary(&location, &compass, args.heading));

    if args.frames > 0 {
        println!();
        print!(
            "{}",
            render_frames(&mut compass, args.frames, config.compass.smoothing())
        );
    }

    Ok(())
}

fn render_summary(location: &Location, compass: &CompassController, heading: Option<f64>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Location:      {}\n", location.describe()));
    out.push_str(&format!(
        "Qibla bearing: {:.2}° from true north ({})\n",
        compass.qibla_bearing(),
        cardinal(compass.qibla_bearing())
    ));
    out.push_str(&format!(
        "Distance:      {:.0} km to the Kaaba\n",
        compass.distance_km()
    ));
    if let Some(heading) = heading {
        out.push_str(&format!(
            "Device heading {:.1}°: turn the needle {:.2}° clockwise from the top\n",
            normalize_degrees(heading),
            compass.target()
        ));
    }
    out
}

fn render_frames(compass: &mut CompassController, frames: usize, smoothing: SmoothingFactor) -> String {
    let mut out = format!(
        "Needle (smoothing {}, target {:.2}°)\n",
        smoothing.get(),
        compass.target()
    );
    for frame in 1..=frames {
        let angle = compass.frame();
        out.push_str(&format!("  frame {:>4}: {:>7.2}°\n", frame, angle));
    }
    out
}

/// 16-wind compass point for a bearing.
fn cardinal(bearing: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let index = ((normalize_degrees(bearing) + 11.25) / 22.5) as usize % POINTS.len();
    POINTS[index]
}
