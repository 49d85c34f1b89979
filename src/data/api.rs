use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::request::{RequestError, RequestOptions, fetch_json};
use crate::domain::weather::{
    CurrentConditions, DailyForecast, Location, WeatherReport, parse_date, parse_timestamp,
};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone)]
pub struct AtmosClient {
    client: Client,
    base_url: String,
}

impl AtmosClient {
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RequestError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn call(&self, path: &str, options: RequestOptions) -> Result<Value, RequestError> {
        let url = format!("{}{path}", self.base_url);
        fetch_json(&self.client, &url, options).await
    }

    async fn call_typed<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, RequestError> {
        let body = self.call(path, options).await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn health(&self) -> Result<bool, RequestError> {
        let status: HealthResponse = self.call_typed("/health", RequestOptions::get()).await?;
        Ok(status.ok)
    }

    pub async fn current_weather(&self, location: &str) -> Result<WeatherReport, RequestError> {
        let payload: CurrentWeatherResponse = self
            .call_typed(
                "/weather/current",
                RequestOptions::get().query("location", location),
            )
            .await?;
        Ok(payload.into_report())
    }

    pub async fn current_weather_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, RequestError> {
        let payload: CurrentWeatherResponse = self
            .call_typed(
                "/weather/current-by-coords",
                RequestOptions::get()
                    .query("lat", latitude)
                    .query("lon", longitude),
            )
            .await?;
        Ok(payload.into_report())
    }

    pub async fn list_queries(&self) -> Result<Vec<QueryRecord>, RequestError> {
        self.call_typed("/queries", RequestOptions::get()).await
    }

    pub async fn query(&self, id: i64) -> Result<QueryRecord, RequestError> {
        self.call_typed(&format!("/queries/{id}"), RequestOptions::get())
            .await
    }

    pub async fn create_query(&self, payload: &QueryCreate) -> Result<QueryRecord, RequestError> {
        payload.validate()?;
        let body = serde_json::to_value(payload)?;
        self.call_typed("/queries", RequestOptions::post(body)).await
    }

    pub async fn update_query(
        &self,
        id: i64,
        payload: &QueryUpdate,
    ) -> Result<QueryRecord, RequestError> {
        payload.validate()?;
        let body = serde_json::to_value(payload)?;
        self.call_typed(&format!("/queries/{id}"), RequestOptions::put(body))
            .await
    }

    pub async fn delete_query(&self, id: i64) -> Result<bool, RequestError> {
        let result: DeleteResponse = self
            .call_typed(&format!("/queries/{id}"), RequestOptions::delete())
            .await?;
        Ok(result.deleted)
    }

    pub async fn export(&self, format: ExportFormat) -> Result<Export, RequestError> {
        let body = self
            .call(&format!("/export/{}", format.as_str()), RequestOptions::get())
            .await?;
        match format {
            ExportFormat::Json => {
                let export: JsonExport = serde_json::from_value(body)?;
                Ok(Export::Json(export.items))
            }
            ExportFormat::Csv | ExportFormat::Markdown => Ok(Export::Text(match body {
                Value::String(text) => text,
                other => other.to_string(),
            })),
        }
    }

    pub async fn maps_link(&self, location: &str) -> Result<String, RequestError> {
        let link: MapsLink = self
            .call_typed(
                "/integrations/maps",
                RequestOptions::get().query("location", location),
            )
            .await?;
        Ok(link.maps_url)
    }

    pub async fn youtube_link(&self, location: &str) -> Result<String, RequestError> {
        let link: YoutubeLink = self
            .call_typed(
                "/integrations/youtube",
                RequestOptions::get().query("location", location),
            )
            .await?;
        Ok(link.youtube_url)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QueryRecord {
    pub id: i64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryCreate {
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryValidationError {
    #[error("Location must be at least 2 characters")]
    LocationTooShort,
    #[error("Dates must be YYYY-MM-DD")]
    InvalidDate,
    #[error("start_date must be before or equal to end_date")]
    StartAfterEnd,
}

impl QueryCreate {
    pub fn new(
        location: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Result<Self, QueryValidationError> {
        let query = Self {
            location: location.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        };
        query.validate()?;
        Ok(query)
    }

    pub fn validate(&self) -> Result<(), QueryValidationError> {
        validate_location(&self.location)?;
        validate_dates(&self.start_date, &self.end_date)
    }
}

impl QueryUpdate {
    /// Checks whatever dates are present; a lone date is only checked for
    /// format since the stored counterpart is unknown here.
    pub fn validate(&self) -> Result<(), QueryValidationError> {
        if let Some(location) = self.location.as_deref() {
            validate_location(location)?;
        }
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) => validate_dates(start, end),
            (Some(date), None) | (None, Some(date)) => parse_date(date)
                .map(|_| ())
                .ok_or(QueryValidationError::InvalidDate),
            (None, None) => Ok(()),
        }
    }
}

fn validate_location(location: &str) -> Result<(), QueryValidationError> {
    if location.chars().count() < 2 {
        return Err(QueryValidationError::LocationTooShort);
    }
    Ok(())
}

pub fn validate_dates(start_date: &str, end_date: &str) -> Result<(), QueryValidationError> {
    let (Some(start), Some(end)) = (parse_date(start_date), parse_date(end_date)) else {
        return Err(QueryValidationError::InvalidDate);
    };
    if start > end {
        return Err(QueryValidationError::StartAfterEnd);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Export {
    Json(Vec<QueryRecord>),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    ok: bool,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    deleted: bool,
}

#[derive(Debug, Deserialize)]
struct JsonExport {
    items: Vec<QueryRecord>,
}

#[derive(Debug, Deserialize)]
struct MapsLink {
    maps_url: String,
}

#[derive(Debug, Deserialize)]
struct YoutubeLink {
    youtube_url: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    location: LocationBlock,
    weather: WeatherBlock,
}

#[derive(Debug, Deserialize)]
struct LocationBlock {
    name: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherBlock {
    current: CurrentBlock,
    #[serde(default)]
    daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    time: Option<String>,
    temperature_2m: f32,
    apparent_temperature: Option<f32>,
    relative_humidity_2m: Option<f32>,
    weather_code: i32,
    wind_speed_10m: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<Option<i32>>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
    precipitation_probability_max: Vec<Option<f32>>,
}

impl CurrentWeatherResponse {
    fn into_report(self) -> WeatherReport {
        let daily = self.weather.daily.as_ref().map(parse_daily).unwrap_or_default();
        let current = self.weather.current;
        WeatherReport {
            location: Location {
                name: self.location.name,
                country: self.location.country,
                latitude: self.location.latitude,
                longitude: self.location.longitude,
            },
            current: CurrentConditions {
                time: current.time.as_deref().and_then(parse_timestamp),
                temperature_2m_c: current.temperature_2m,
                apparent_temperature_c: current.apparent_temperature,
                relative_humidity_2m: current.relative_humidity_2m,
                weather_code: current.weather_code,
                wind_speed_10m: current.wind_speed_10m,
            },
            daily,
            fetched_at: Utc::now(),
        }
    }
}

fn parse_daily(daily: &DailyBlock) -> Vec<DailyForecast> {
    let mut out = Vec::new();
    for (idx, raw) in daily.time.iter().enumerate() {
        let Some(date) = parse_date(raw) else {
            continue;
        };

        out.push(DailyForecast {
            date,
            weather_code: daily.weather_code.get(idx).copied().flatten(),
            temperature_max_c: daily.temperature_2m_max.get(idx).copied().flatten(),
            temperature_min_c: daily.temperature_2m_min.get(idx).copied().flatten(),
            precipitation_probability_max: daily
                .precipitation_probability_max
                .get(idx)
                .copied()
                .flatten(),
        });
    }
    out
}
