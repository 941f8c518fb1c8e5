//! User configuration stored in `~/.salat/config.ini`.
//!
//! The file is split into one `[section]` per concern:
//!
//! - `[location]`: observer coordinate and display label
//! - `[timings]`: prayer-times provider request parameters and Iqamah offset
//! - `[adhan]`: trigger policy and daemon tick rate
//! - `[compass]`: heading smoothing
//! - `[logging]`: log file location
//!
//! A missing file yields defaults. Individual values can be read and written
//! by dotted name through [`ConfigKey`].
//!
//! # Example
//!
//! ```
//! use salat::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "timings.iqamah_offset_minutes".parse().unwrap();
//! key.set(&mut config, "15").unwrap();
//! assert_eq!(config.timings.iqamah_offset_minutes, 15);
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    AdhanSettings, CompassSettings, ConfigFile, LocationSettings, LoggingSettings,
    TimingsSettings,
};
