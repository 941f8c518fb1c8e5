//! Watch command - announce each Adhan as it happens until Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use salat::adhan::Announcement;
use salat::controller::PrayerController;
use salat::daemon::AdhanDaemon;
use salat::time::{Clock, SystemClock};

use super::common::load_schedule;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Announcements buffered between the daemon and the printer.
const ANNOUNCEMENT_BUFFER: usize = 8;

/// Arguments for the watch command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Provider response or bare {"Fajr": "05:00", ...} JSON file
    #[arg(long)]
    pub timings: PathBuf,
}

/// Run the watch command.
pub fn run(args: WatchArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("watch");
    let config = runner.config();

    if !config.adhan.enabled {
        println!("Adhan announcements are disabled (adhan.enabled = false).");
        println!("Enable them with: salat config set adhan.enabled true");
        return Ok(());
    }

    let schedule = load_schedule(&args.timings)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut controller = PrayerController::from_config(schedule, config, runner.logger());

    // First tick so the user sees where the day stands before waiting
    let report = controller.tick(clock.now());
    println!("Watching prayer times ({})", report.query);
    if let Some(announcement) = &report.announcement {
        print_announcement(announcement);
    }
    println!("Press Ctrl-C to stop.");

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    ctrlc::set_handler(move || signal_token.cancel())
        .map_err(|e| CliError::Runtime(format!("Failed to set signal handler: {}", e)))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    let tick_interval = config.adhan.tick_interval();
    runtime.block_on(async move {
        let (tx, mut rx) = mpsc::channel(ANNOUNCEMENT_BUFFER);
        let daemon = AdhanDaemon::new(controller, clock, tx).with_tick_interval(tick_interval);
        let handle = tokio::spawn(daemon.run(shutdown));

        while let Some(announcement) = rx.recv().await {
            print_announcement(&announcement);
        }

        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Adhan daemon task failed");
        }
    });

    println!("Stopped.");
    Ok(())
}

fn print_announcement(announcement: &Announcement) {
    // Terminal bell stands in for the audio player
    println!("\x07{}", announcement);
}
