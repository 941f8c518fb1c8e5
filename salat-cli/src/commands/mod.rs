//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`qibla`] - Qibla bearing and compass needle simulation
//! - [`times`] - Prayer table with Iqamah times and countdown
//! - [`url`] - Prayer-times provider request URL
//! - [`watch`] - Announce each Adhan as it happens

pub mod common;
pub mod config;
pub mod qibla;
pub mod times;
pub mod url;
pub mod watch;
