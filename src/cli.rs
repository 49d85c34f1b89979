#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::{data::api::ExportFormat, domain::weather::Units};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Celsius => Self::Celsius,
            UnitsArg::Fahrenheit => Self::Fahrenheit,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportArg {
    Json,
    Csv,
    Md,
}

impl From<ExportArg> for ExportFormat {
    fn from(value: ExportArg) -> Self {
        match value {
            ExportArg::Json => Self::Json,
            ExportArg::Csv => Self::Csv,
            ExportArg::Md => Self::Markdown,
        }
    }
}

#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "atmos-weather",
    version,
    about = "Current conditions and saved queries from an Atmos weather backend"
)]
pub struct Cli {
    /// Location name to look up
    pub location: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Display units (overrides the saved preference)
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Backend API base URL, e.g. http://127.0.0.1:8000/api
    #[arg(long)]
    pub api_url: Option<String>,

    /// Flip the saved unit preference before printing
    #[arg(long)]
    pub toggle_units: bool,

    /// List saved weather queries
    #[arg(long, conflicts_with = "export")]
    pub history: bool,

    /// Print the saved query export in the given format
    #[arg(long, value_enum)]
    pub export: Option<ExportArg>,
}

impl Cli {
    #[must_use]
    pub fn default_location(&self) -> String {
        self.location.clone().unwrap_or_else(|| "Stockholm".to_string())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }
}
