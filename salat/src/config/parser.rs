//! INI parsing: `Ini` → `ConfigFile`.
//!
//! Values are applied through [`ConfigKey::set`] so the file and the
//! `config set` command share one set of validation rules.

use ini::Ini;

use super::file::ConfigFileError;
use super::keys::{ConfigKey, ConfigKeyError};
use super::settings::ConfigFile;

/// Parses an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays the values found. Empty
/// values keep their default. Unknown keys are logged and skipped.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    for key in ConfigKey::all() {
        let Some(value) = ini
            .section(Some(key.section()))
            .and_then(|section| section.get(key.key_name()))
        else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }

        key.set(&mut config, value).map_err(|e| {
            let reason = match e {
                ConfigKeyError::ValidationFailed { reason, .. } => reason,
                other => other.to_string(),
            };
            ConfigFileError::InvalidValue {
                section: key.section().to_string(),
                key: key.key_name().to_string(),
                value: value.to_string(),
                reason,
            }
        })?;
    }

    for (section, properties) in ini.iter() {
        let Some(section) = section else { continue };
        for (name, _) in properties.iter() {
            let dotted = format!("{}.{}", section, name);
            if dotted.parse::<ConfigKey>().is_err() {
                tracing::warn!(key = %dotted, "Ignoring unknown configuration key");
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(text).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse(
            r#"
[location]
latitude = 51.5074
longitude = -0.1278
label = London

[adhan]
match_window_secs = 3
"#,
        )
        .unwrap();

        assert_eq!(config.location.latitude, 51.5074);
        assert_eq!(config.location.longitude, -0.1278);
        assert_eq!(config.location.label, "London");
        assert_eq!(config.adhan.match_window_secs, 3);
        // untouched sections keep defaults
        assert_eq!(config.timings, ConfigFile::default().timings);
        assert_eq!(config.compass, ConfigFile::default().compass);
    }

    #[test]
    fn test_invalid_latitude() {
        let err = parse("[location]\nlatitude = 123\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue {
                section,
                key,
                value,
                reason,
            } => {
                assert_eq!(section, "location");
                assert_eq!(key, "latitude");
                assert_eq!(value, "123");
                assert!(reason.contains("between -90 and 90"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_smoothing_factor() {
        let err = parse("[compass]\nsmoothing_factor = 0\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "smoothing_factor"));
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let config = parse("[logging]\nfile =\n").unwrap();
        assert_eq!(config.logging.file, ConfigFile::default().logging.file);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse("[location]\naltitude = 40\n[extra]\nfoo = bar\n").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_boolean_spellings() {
        assert!(!parse("[adhan]\nenabled = no\n").unwrap().adhan.enabled);
        assert!(parse("[adhan]\nenabled = ON\n").unwrap().adhan.enabled);
    }
}
