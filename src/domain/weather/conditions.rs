/// One row of the WMO code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherCodeEntry {
    pub code: i32,
    pub description: &'static str,
    pub day_icon: &'static str,
    pub night_icon: &'static str,
    pub color_class: &'static str,
}

/// Display metadata resolved for a code and a day/night flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub description: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
}

const fn row(
    code: i32,
    description: &'static str,
    day_icon: &'static str,
    night_icon: &'static str,
    color_class: &'static str,
) -> WeatherCodeEntry {
    WeatherCodeEntry {
        code,
        description,
        day_icon,
        night_icon,
        color_class,
    }
}

pub const UNKNOWN_ENTRY: WeatherCodeEntry =
    row(-1, "Unknown", "cloud", "cloud", "text-slate-300");

pub const WEATHER_CODES: &[WeatherCodeEntry] = &[
    row(0, "Clear", "clear_day", "bedtime", "text-yellow-300"),
    row(1, "Mainly Clear", "clear_day", "clear_night", "text-yellow-200"),
    row(2, "Partly Cloudy", "partly_cloudy_day", "partly_cloudy_night", "text-slate-300"),
    row(3, "Cloudy", "cloud", "cloud", "text-slate-300"),
    row(45, "Fog", "foggy", "foggy", "text-slate-400"),
    row(48, "Depositing Fog", "foggy", "foggy", "text-slate-400"),
    row(51, "Light Drizzle", "rainy_light", "rainy_light", "text-blue-300"),
    row(53, "Drizzle", "rainy_light", "rainy_light", "text-blue-300"),
    row(55, "Dense Drizzle", "rainy", "rainy", "text-blue-400"),
    row(61, "Light Rain", "rainy", "rainy", "text-blue-400"),
    row(63, "Rain", "rainy", "rainy", "text-blue-400"),
    row(65, "Heavy Rain", "rainy_heavy", "rainy_heavy", "text-blue-500"),
    row(71, "Light Snow", "weather_snowy", "weather_snowy", "text-sky-200"),
    row(73, "Snow", "weather_snowy", "weather_snowy", "text-sky-300"),
    row(75, "Heavy Snow", "ac_unit", "ac_unit", "text-sky-400"),
    row(80, "Rain Showers", "rainy", "rainy", "text-blue-300"),
    row(81, "Moderate Showers", "rainy", "rainy", "text-blue-400"),
    row(82, "Heavy Showers", "rainy_heavy", "rainy_heavy", "text-blue-500"),
    row(95, "Thunderstorm", "thunderstorm", "thunderstorm", "text-yellow-300"),
    row(96, "Thunderstorm + Hail", "thunderstorm", "thunderstorm", "text-yellow-400"),
    row(99, "Severe Thunderstorm", "thunderstorm", "thunderstorm", "text-red-400"),
];

/// Raw table row for `code`, if the code is known.
#[must_use]
pub fn entry(code: i32) -> Option<&'static WeatherCodeEntry> {
    WEATHER_CODES.iter().find(|candidate| candidate.code == code)
}

/// Total lookup: unknown codes resolve to [`UNKNOWN_ENTRY`].
#[must_use]
pub fn lookup(code: i32, is_night: bool) -> WeatherInfo {
    let entry = entry(code).unwrap_or(&UNKNOWN_ENTRY);
    WeatherInfo {
        description: entry.description,
        icon: if is_night {
            entry.night_icon
        } else {
            entry.day_icon
        },
        color_class: entry.color_class,
    }
}

#[must_use]
pub fn weather_label(code: i32) -> &'static str {
    lookup(code, false).description
}
