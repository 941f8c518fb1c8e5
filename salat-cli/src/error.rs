//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use salat::config::ConfigFileError;
use salat::timings::TimingsError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read, parsed or written
    ConfigFile(ConfigFileError),
    /// Timings file could not be loaded
    Timings { path: PathBuf, error: TimingsError },
    /// Bad command-line value
    InvalidArgument(String),
    /// Async runtime or signal handler setup failed
    Runtime(String),
}

impl CliError {
    /// Exit the process with an error message and status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::Timings { .. } => {
                eprintln!();
                eprintln!("The timings file must be either:");
                eprintln!("  1. An AlAdhan response: {{\"code\":200,\"data\":{{\"timings\":{{...}}}}}}");
                eprintln!("  2. A bare object: {{\"Fajr\":\"05:00\",\"Dhuhr\":\"13:00\",...}}");
                eprintln!("Times are 24-hour HH:MM. Use 'salat url' to build the request.");
            }
            CliError::ConfigFile(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Fix the value with 'salat config set <key> <value>',");
                eprintln!("or edit the file shown by 'salat config path'.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Timings { path, error } => {
                write!(f, "Failed to load timings from '{}': {}", path.display(), error)
            }
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Timings { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CliError::InvalidArgument("--lat needs --lon".to_string()).to_string(),
            "Invalid argument: --lat needs --lon"
        );
        assert_eq!(
            CliError::Config("bad".to_string()).to_string(),
            "Configuration error: bad"
        );
    }

    #[test]
    fn test_config_file_error_converts() {
        let err: CliError = ConfigFileError::WriteError("disk full".to_string()).into();
        assert!(matches!(err, CliError::ConfigFile(_)));
        assert_eq!(err.to_string(), "Failed to write config file: disk full");
    }
}
