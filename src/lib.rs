pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

use std::io::{self, Write};

use anyhow::{Context, Result};
use app::settings::{RuntimeSettings, load_runtime_settings};
use cli::Cli;
use data::api::{AtmosClient, Export};

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let settings = load_runtime_settings(&cli, true)?;
    run_with(&cli, &settings, &mut io::stdout()).await
}

/// Fetches whatever `cli` asks for and writes the rendered lines to `out`.
pub async fn run_with(
    cli: &Cli,
    settings: &RuntimeSettings,
    out: &mut impl Write,
) -> Result<()> {
    let client = AtmosClient::with_base_url(&settings.api_url, settings.request_timeout())
        .context("building HTTP client failed")?;

    let lines = if cli.history {
        let records = client
            .list_queries()
            .await
            .context("loading saved queries failed")?;
        ui::snapshot::render_history(&records)
    } else if let Some(format) = cli.export {
        match client
            .export(format.into())
            .await
            .context("exporting saved queries failed")?
        {
            Export::Json(items) => vec![
                serde_json::to_string_pretty(&items).context("serializing export failed")?,
            ],
            Export::Text(body) => vec![body],
        }
    } else {
        let report = match cli.coordinates() {
            Some((lat, lon)) => client.current_weather_by_coords(lat, lon).await,
            None => client.current_weather(&cli.default_location()).await,
        }
        .context("fetching current weather failed")?;
        ui::snapshot::render_report(&report, settings.unit_preference())
    };

    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
