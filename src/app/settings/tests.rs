use clap::Parser;
use tempfile::NamedTempFile;

use super::{
    RuntimeSettings, load_runtime_settings, load_runtime_settings_from, read_saved_settings,
    resolve_runtime_settings, save_runtime_settings,
};
use crate::{cli::Cli, data::api::DEFAULT_API_URL, domain::weather::Units};

fn default_cli() -> Cli {
    Cli::parse_from(["atmos-weather"])
}

#[test]
fn defaults_are_metric_against_local_backend() {
    let settings = RuntimeSettings::default();
    assert_eq!(settings.units, Units::Celsius);
    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.request_timeout().as_secs(), 20);
    assert!(settings.unit_preference().is_metric());
}

#[test]
fn load_runtime_settings_without_disk_returns_cli_defaults() {
    let settings = load_runtime_settings(&default_cli(), false).expect("load settings");
    assert_eq!(settings, RuntimeSettings::default());
}

#[test]
fn saved_settings_roundtrip_through_disk() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("nested").join("settings.json");
    let saved = RuntimeSettings {
        units: Units::Fahrenheit,
        api_url: "http://weather.local/api".to_string(),
        request_timeout_secs: 5,
    };

    save_runtime_settings(&path, &saved).expect("save settings");
    let loaded = load_runtime_settings_from(&default_cli(), Some(&path));

    assert_eq!(loaded, saved);
}

#[test]
fn cli_values_override_saved_settings() {
    let file = NamedTempFile::new().expect("create temp settings file");
    let saved = RuntimeSettings {
        units: Units::Fahrenheit,
        ..RuntimeSettings::default()
    };
    save_runtime_settings(file.path(), &saved).expect("save settings");

    let cli = Cli::parse_from([
        "atmos-weather",
        "--units",
        "celsius",
        "--api-url",
        "http://override/api",
    ]);
    let loaded = load_runtime_settings_from(&cli, Some(file.path()));

    assert_eq!(loaded.units, Units::Celsius);
    assert_eq!(loaded.api_url, "http://override/api");
}

#[test]
fn malformed_or_partial_files_fall_back_to_defaults() {
    let file = NamedTempFile::new().expect("create temp settings file");
    std::fs::write(file.path(), "{ not json").expect("write settings");
    assert_eq!(
        load_runtime_settings_from(&default_cli(), Some(file.path())),
        RuntimeSettings::default()
    );

    std::fs::write(file.path(), r#"{"units":"Fahrenheit"}"#).expect("write settings");
    let partial = load_runtime_settings_from(&default_cli(), Some(file.path()));
    assert_eq!(partial.units, Units::Fahrenheit);
    assert_eq!(partial.api_url, DEFAULT_API_URL);
}

#[test]
fn missing_file_is_not_an_error() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("absent.json");
    assert_eq!(
        load_runtime_settings_from(&default_cli(), Some(&path)),
        RuntimeSettings::default()
    );
}

#[test]
fn toggle_units_persists_only_the_flipped_units() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("settings.json");
    let saved = RuntimeSettings {
        request_timeout_secs: 7,
        ..RuntimeSettings::default()
    };
    save_runtime_settings(&path, &saved).expect("save settings");

    let cli = Cli::parse_from([
        "atmos-weather",
        "--api-url",
        "http://127.0.0.1:9/api",
        "--toggle-units",
    ]);
    let settings = resolve_runtime_settings(&cli, Some(&path)).expect("resolve settings");

    assert_eq!(settings.units, Units::Fahrenheit);
    assert_eq!(settings.api_url, "http://127.0.0.1:9/api");
    assert_eq!(
        read_saved_settings(Some(&path)),
        RuntimeSettings {
            units: Units::Fahrenheit,
            ..saved
        }
    );
}

#[test]
fn toggle_units_flips_back_and_ignores_units_override_on_disk() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("settings.json");
    let toggle = Cli::parse_from(["atmos-weather", "--toggle-units"]);

    resolve_runtime_settings(&toggle, Some(&path)).expect("first toggle");
    assert_eq!(read_saved_settings(Some(&path)).units, Units::Fahrenheit);

    let with_units = Cli::parse_from([
        "atmos-weather",
        "--units",
        "fahrenheit",
        "--toggle-units",
    ]);
    let settings = resolve_runtime_settings(&with_units, Some(&path)).expect("second toggle");
    assert_eq!(settings.units, Units::Fahrenheit);
    assert_eq!(read_saved_settings(Some(&path)).units, Units::Celsius);
}

#[test]
fn toggle_units_without_disk_only_affects_this_run() {
    let cli = Cli::parse_from(["atmos-weather", "--toggle-units"]);
    let settings = resolve_runtime_settings(&cli, None).expect("resolve settings");
    assert_eq!(settings.units, Units::Fahrenheit);
}
