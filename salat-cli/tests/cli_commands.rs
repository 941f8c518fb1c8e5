//! Integration tests for the salat CLI commands.
//!
//! These tests run the built binary with `HOME` pointed at a temporary
//! directory, so the real `~/.salat/config.ini` is never touched.
//!
//! # Running Integration Tests
//!
//! Integration tests are excluded from regular test runs. Use:
//! ```bash
//! cargo build && cargo test --test cli_commands -- --ignored --nocapture
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const TIMINGS: &str = r#"{
  "code": 200,
  "status": "OK",
  "data": {
    "timings": {
      "Fajr": "05:31 (WAT)",
      "Sunrise": "06:44 (WAT)",
      "Dhuhr": "12:52 (WAT)",
      "Asr": "16:10 (WAT)",
      "Maghrib": "18:59 (WAT)",
      "Isha": "20:08 (WAT)"
    },
    "date": { "gregorian": { "date": "15-03-2024" } }
  }
}"#;

/// Get the path to the salat CLI binary.
fn cli_binary() -> PathBuf {
    let target = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("target");

    for profile in ["debug", "release"] {
        let path = target.join(profile).join("salat");
        if path.exists() {
            return path;
        }
    }

    panic!("CLI binary not found. Run `cargo build` first.");
}

/// Run a CLI command with an isolated home directory.
fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(cli_binary())
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Assert a command succeeded.
fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context,
            stdout(output),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn write_timings(dir: &Path) -> PathBuf {
    let path = dir.join("timings.json");
    fs::write(&path, TIMINGS).unwrap();
    path
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_qibla_for_configured_location() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["qibla"]);
    assert_success(&output, "qibla");

    let text = stdout(&output);
    assert!(text.contains("Lagos, Nigeria"));
    assert!(text.contains("Qibla bearing: 63.3"));
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_qibla_with_frames() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        &["qibla", "--lat", "40.7128", "--lon", "-74.0060", "--heading", "10", "--frames", "5"],
    );
    assert_success(&output, "qibla --frames");

    let text = stdout(&output);
    assert!(text.contains("Device heading 10.0°"));
    assert!(text.contains("frame    5"));
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_qibla_rejects_lone_latitude() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["qibla", "--lat", "10"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--lat and --lon"));
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_times_table() {
    let home = TempDir::new().unwrap();
    let timings = write_timings(home.path());
    let output = run_cli(
        home.path(),
        &[
            "times",
            "--timings",
            timings.to_str().unwrap(),
            "--at",
            "2024-03-15 21:00:00",
        ],
    );
    assert_success(&output, "times");

    let text = stdout(&output);
    assert!(text.contains("Date: 2024-03-15"));
    assert!(text.contains("> Isha      20:08  20:18"));
    assert!(text.contains("Next: Fajr in 8h 31m 0s"));
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_times_with_bad_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.json");
    fs::write(&path, r#"{"Fajr": "5am"}"#).unwrap();

    let output = run_cli(home.path(), &["times", "--timings", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load timings"));
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_url_command() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["url", "--date", "2024-03-15"]);
    assert_success(&output, "url");

    assert_eq!(
        stdout(&output).trim(),
        "https://api.aladhan.com/v1/timings?latitude=6.5244&longitude=3.3792&method=1&school=0&date=15-03-2024"
    );
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_config_set_get_round_trip() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), &["config", "set", "timings.school", "1"]);
    assert_success(&output, "config set");
    assert!(home.path().join(".salat/config.ini").exists());

    let output = run_cli(home.path(), &["config", "get", "timings.school"]);
    assert_success(&output, "config get");
    assert_eq!(stdout(&output).trim(), "1");

    let output = run_cli(home.path(), &["url", "--date", "2024-03-15"]);
    assert!(stdout(&output).contains("school=1"));
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_config_set_rejects_invalid_value() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        &["config", "set", "compass.smoothing_factor", "2"],
    );
    assert!(!output.status.success());
    assert!(!home.path().join(".salat/config.ini").exists());
}

#[test]
#[ignore = "integration test - requires built binary"]
fn test_config_path_and_list() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), &["config", "path"]);
    assert_success(&output, "config path");
    assert!(stdout(&output).trim().ends_with(".salat/config.ini"));

    let output = run_cli(home.path(), &["config", "list"]);
    assert_success(&output, "config list");
    let text = stdout(&output);
    for section in ["[location]", "[timings]", "[adhan]", "[compass]", "[logging]"] {
        assert!(text.contains(section), "missing {section}");
    }
}
