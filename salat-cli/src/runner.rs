//! CLI runner for common setup.
//!
//! Loads the config file and initializes logging once per command.

use std::sync::Arc;

use salat::config::ConfigFile;
use salat::log::{Logger, TracingLogger};
use salat::logging::{init_logging, split_log_path, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Runner that manages the CLI lifecycle.
pub struct CliRunner {
    /// Keeps the log writer alive while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
}

impl CliRunner {
    /// Loads config and starts logging to the configured file.
    ///
    /// Console logging is only switched on with `--debug`, since most
    /// commands print their own tables to stdout.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Logger handed to the library controllers.
    pub fn logger(&self) -> Arc<dyn Logger> {
        Arc::new(TracingLogger)
    }

    pub fn log_startup(&self, command: &str) {
        info!("salat v{}", salat::VERSION);
        info!(
            command,
            location = %self.config.location.coordinate(),
            label = %self.config.location.label,
            "salat CLI starting"
        );
    }
}
