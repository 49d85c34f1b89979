use std::fmt;

use serde::{Deserialize, Serialize};

use super::conversions::is_night_hour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Thunderstorm,
    Rain,
    Drizzle,
    Snow,
    Fog,
    Cloudy,
    CloudyNight,
    Sunset,
    ClearNight,
    SunnyDay,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thunderstorm => "thunderstorm",
            Self::Rain => "rain",
            Self::Drizzle => "drizzle",
            Self::Snow => "snow",
            Self::Fog => "fog",
            Self::Cloudy => "cloudy",
            Self::CloudyNight => "cloudy-night",
            Self::Sunset => "sunset",
            Self::ClearNight => "clear-night",
            Self::SunnyDay => "sunny-day",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority cascade: precipitation and fog classes win over any time-of-day
/// rule, so a storm at 17:00 is never a sunset.
#[must_use]
pub fn derive_theme(code: i32, hour: u32) -> Theme {
    cascade(code, is_night_hour(hour), hour == 6 || hour == 17)
}

/// Same cascade for a possibly unknown hour. Without an hour the code is
/// treated as daytime outside the sunset hours.
#[must_use]
pub fn theme_at(code: i32, hour: Option<u32>) -> Theme {
    match hour {
        Some(hour) => derive_theme(code, hour),
        None => cascade(code, false, false),
    }
}

fn cascade(code: i32, night: bool, sunset_hour: bool) -> Theme {
    match code {
        95 | 96 | 99 => Theme::Thunderstorm,
        61 | 63 | 65 | 80 | 81 | 82 => Theme::Rain,
        51 | 53 | 55 => Theme::Drizzle,
        71 | 73 | 75 => Theme::Snow,
        45 | 48 => Theme::Fog,
        1..=3 if night => Theme::CloudyNight,
        1..=3 => Theme::Cloudy,
        _ if !night && sunset_hour => Theme::Sunset,
        _ if night => Theme::ClearNight,
        _ => Theme::SunnyDay,
    }
}
