//! Adapter from [`Logger`] to the `tracing` crate.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Forwards controller log lines to `tracing`, under the `salat` target.
///
/// Output appears wherever the subscriber installed by
/// [`crate::logging::init_logging`] sends it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "salat", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "salat", "{}", args),
            LogLevel::Info => tracing::info!(target: "salat", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "salat", "{}", args),
            LogLevel::Error => tracing::error!(target: "salat", "{}", args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        // No subscriber installed: calls are accepted and dropped
        let logger: Box<dyn Logger> = Box::new(TracingLogger::new());
        logger.info(format_args!("Adhan for {}", "Fajr"));
        logger.debug(format_args!("tick"));
    }
}
