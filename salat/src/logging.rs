//! Logging infrastructure.
//!
//! Structured logging to a session log file, with optional console output:
//! - The log file is cleared at the start of each session
//! - Console output can be switched off for commands that print tables
//! - Filtering follows `RUST_LOG`, defaulting to `info` (or `debug`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILE_NAME;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initializes the global tracing subscriber.
///
/// Creates `log_dir` if needed, truncates `log_dir/log_file`, and installs a
/// file layer plus, when `stdout_enabled`, a console layer.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// truncated.
pub fn init_logging(
    log_dir: &Path,
    log_file: &str,
    stdout_enabled: bool,
    debug: bool,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;
    fs::write(log_dir.join(log_file), "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = stdout_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(true)
            .compact()
    });

    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: a subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Splits a configured log file path into `(directory, file name)`.
///
/// A bare file name logs into the current directory.
pub fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());
    (dir, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("/var/log/salat/run.log"));
        assert_eq!(dir, PathBuf::from("/var/log/salat"));
        assert_eq!(file, "run.log");
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, file) = split_log_path(Path::new("salat.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, "salat.log");
    }

    #[test]
    fn test_split_root_falls_back_to_default_name() {
        let (_, file) = split_log_path(Path::new("/"));
        assert_eq!(file, DEFAULT_LOG_FILE_NAME);
    }

    #[test]
    fn test_init_creates_and_clears_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("logs");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("test.log"), "old session").unwrap();

        let guard = init_logging(&dir, "test.log", false, false).unwrap();
        assert!(dir.join("test.log").exists());
        assert_eq!(std::fs::read_to_string(dir.join("test.log")).unwrap(), "");
        drop(guard);
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);
        let _logging_guard = LoggingGuard { _file_guard: guard };
    }
}
