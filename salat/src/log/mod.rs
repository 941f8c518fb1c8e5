//! Logging seam for the host-side controllers.
//!
//! Controllers report schedule changes and announcements through the
//! [`Logger`] trait instead of calling `tracing` directly, so a host can
//! route them wherever it likes and tests can inspect them.
//!
//! - [`TracingLogger`]: forwards to the `tracing` macros (production)
//! - [`NoOpLogger`]: discards everything
//! - [`MemoryLogger`]: keeps lines in memory for assertions
//!
//! ```
//! use salat::log::{Logger, MemoryLogger};
//! use salat::log_info;
//! use std::sync::Arc;
//!
//! let logger = Arc::new(MemoryLogger::new());
//! log_info!(logger, "Schedule loaded for {}", "Lagos");
//! assert_eq!(logger.lines(), vec!["INFO Schedule loaded for Lagos"]);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
