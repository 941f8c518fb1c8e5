//! salat CLI - prayer times, Adhan announcements and qibla direction
//!
//! This binary is a thin command-line host for the salat library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::qibla::QiblaArgs;
use commands::times::TimesArgs;
use commands::url::UrlArgs;
use commands::watch::WatchArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "salat")]
#[command(version = salat::VERSION)]
#[command(about = "Prayer times, Adhan announcements and qibla direction", long_about = None)]
struct Cli {
    /// Enable debug logging (also printed to the console)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the qibla bearing for a location
    Qibla(QiblaArgs),

    /// Show today's prayer table, Iqamah times and countdown
    Times(TimesArgs),

    /// Print the prayer-times provider request URL
    Url(UrlArgs),

    /// Announce each Adhan as it happens until Ctrl-C
    Watch(WatchArgs),

    /// View or change settings in ~/.salat/config.ini
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Qibla(args) => commands::qibla::run(args, cli.debug),
        Commands::Times(args) => commands::times::run(args, cli.debug),
        Commands::Url(args) => commands::url::run(args, cli.debug),
        Commands::Watch(args) => commands::watch::run(args, cli.debug),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
