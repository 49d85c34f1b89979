use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    app::state::UnitPreference, cli::Cli, data::api::DEFAULT_API_URL, domain::weather::Units,
};

const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub units: Units,
    pub api_url: String,
    pub request_timeout_secs: u64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            units: Units::Celsius,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RuntimeSettings {
    pub fn unit_preference(&self) -> UnitPreference {
        UnitPreference::new(self.units)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Layers explicit command-line values over whatever was loaded.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(units) = cli.units {
            self.units = units.into();
        }
        if let Some(url) = cli.api_url.as_ref() {
            self.api_url.clone_from(url);
        }
    }
}

/// Settings for one run. With `enable_disk` the saved file is read and, on
/// `--toggle-units`, rewritten.
pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> anyhow::Result<RuntimeSettings> {
    let path = enable_disk.then(settings_path).flatten();
    resolve_runtime_settings(cli, path.as_deref())
}

/// Applies `--toggle-units` to the saved settings at `path` and persists
/// them before the other command-line values are layered on top, so one-off
/// overrides never reach the file.
pub fn resolve_runtime_settings(
    cli: &Cli,
    path: Option<&Path>,
) -> anyhow::Result<RuntimeSettings> {
    let mut settings = read_saved_settings(path);
    if cli.toggle_units {
        settings.units = settings.unit_preference().toggle();
        if let Some(path) = path {
            save_runtime_settings(path, &settings)?;
            tracing::info!(
                units = ?settings.units,
                path = %path.display(),
                "saved unit preference"
            );
        }
    }
    settings.apply_cli(cli);
    Ok(settings)
}

pub fn load_runtime_settings_from(cli: &Cli, path: Option<&Path>) -> RuntimeSettings {
    let mut settings = read_saved_settings(path);
    settings.apply_cli(cli);
    settings
}

/// Reads `path` when given; a missing or unreadable file yields defaults.
pub fn read_saved_settings(path: Option<&Path>) -> RuntimeSettings {
    path.and_then(|path| fs::read_to_string(path).ok())
        .and_then(|content| match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => Some(saved),
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed settings file");
                None
            }
        })
        .unwrap_or_default()
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("ATMOS_WEATHER_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("atmos-weather")
            .join("settings.json"),
    )
}

#[cfg(test)]
mod tests;
