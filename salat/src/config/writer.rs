//! INI serialization: `ConfigFile` → commented INI text.

use super::keys::path_to_display;
use super::settings::ConfigFile;

/// Converts a `ConfigFile` to the commented INI text written to `config.ini`.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[location]
; Observer position in decimal degrees (north and east positive)
latitude = {}
longitude = {}
; Place name shown next to the schedule
label = {}

[timings]
; Base URL of the AlAdhan-compatible prayer times API
api_base = {}
; Calculation method (1 = University of Islamic Sciences, Karachi)
method = {}
; Asr school: 0 = Shafi'i, 1 = Hanafi
school = {}
; Minutes between the Adhan and the Iqamah (0-120)
iqamah_offset_minutes = {}

[adhan]
; Announce each prayer when its start time arrives
enabled = {}
; Seconds after the start time during which a missed tick may still fire (0-59)
; 0 fires only on the exact second
match_window_secs = {}
; How often the watch loop checks the clock, in milliseconds (100-60000)
tick_interval_ms = {}

[compass]
; Fraction of the remaining angle the needle moves per frame, in (0, 1]
smoothing_factor = {}

[logging]
; Log file (cleared at the start of each session)
file = {}
"#,
        config.location.latitude,
        config.location.longitude,
        config.location.label,
        config.timings.api_base,
        config.timings.method,
        config.timings.school,
        config.timings.iqamah_offset_minutes,
        config.adhan.enabled,
        config.adhan.match_window_secs,
        config.adhan.tick_interval_ms,
        config.compass.smoothing_factor,
        path_to_display(&config.logging.file),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini::Ini;

    #[test]
    fn test_written_file_parses_back() {
        let mut config = ConfigFile::default();
        config.location.label = "Makkah".to_string();
        config.adhan.match_window_secs = 7;
        config.compass.smoothing_factor = 0.25;

        let text = to_config_string(&config);
        let ini = Ini::load_from_str(&text).unwrap();
        let parsed = super::super::parser::parse_ini(&ini).unwrap();

        assert_eq!(parsed.location.label, "Makkah");
        assert_eq!(parsed.adhan.match_window_secs, 7);
        assert_eq!(parsed.compass.smoothing_factor, 0.25);
    }

    #[test]
    fn test_contains_every_section() {
        let text = to_config_string(&ConfigFile::default());
        for section in ["[location]", "[timings]", "[adhan]", "[compass]", "[logging]"] {
            assert!(text.contains(section), "missing {section}");
        }
    }
}
