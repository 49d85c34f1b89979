use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

mod conditions;
mod conversions;
mod theme;

pub use conditions::{
    UNKNOWN_ENTRY, WEATHER_CODES, WeatherCodeEntry, WeatherInfo, entry, lookup, weather_label,
};
pub use conversions::{
    convert_temp, extract_hour, is_night_hour, parse_date, parse_datetime, parse_timestamp,
    round_temp, round_wind_speed,
};
pub use theme::{Theme, derive_theme, theme_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn display_name(&self) -> String {
        match (&self.name, &self.country) {
            (Some(name), Some(country)) => format!("{name}, {country}"),
            (Some(name), None) => name.clone(),
            _ => format!("{:.4}, {:.4}", self.latitude, self.longitude),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub time: Option<NaiveDateTime>,
    pub temperature_2m_c: f32,
    pub apparent_temperature_c: Option<f32>,
    pub relative_humidity_2m: Option<f32>,
    pub weather_code: i32,
    pub wind_speed_10m: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub temperature_max_c: Option<f32>,
    pub temperature_min_c: Option<f32>,
    pub precipitation_probability_max: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Hour of the observation in the location's own clock.
    pub fn observed_hour(&self) -> Option<u32> {
        self.current.time.map(|time| time.hour())
    }

    pub fn is_night(&self) -> bool {
        self.observed_hour().is_some_and(is_night_hour)
    }

    pub fn info(&self) -> WeatherInfo {
        lookup(self.current.weather_code, self.is_night())
    }

    pub fn theme(&self) -> Theme {
        theme_at(self.current.weather_code, self.observed_hour())
    }
}
