use crate::{
    app::state::UnitPreference,
    data::api::QueryRecord,
    domain::weather::{DailyForecast, WeatherReport, round_wind_speed, weather_label},
};

const MISSING: &str = "--";

/// Plain-text rendering of a report, one line per row.
pub fn render_report(report: &WeatherReport, prefs: UnitPreference) -> Vec<String> {
    let info = report.info();
    let current = &report.current;

    let mut condition = format!(
        "[{}] {}  {}",
        info.icon,
        info.description,
        prefs.format_temp(current.temperature_2m_c)
    );
    if let Some(feels) = current.apparent_temperature_c {
        condition.push_str(&format!("  feels {}", prefs.format_temp(feels)));
    }
    condition.push_str(&format!("  theme {}", report.theme()));

    let humidity = current
        .relative_humidity_2m
        .map_or_else(|| MISSING.to_string(), |h| format!("{}%", h.round() as i32));
    let wind = current
        .wind_speed_10m
        .map_or_else(|| MISSING.to_string(), |w| format!("{} km/h", round_wind_speed(w)));

    let mut lines = vec![
        report.location.display_name(),
        condition,
        format!("Humidity {humidity}  Wind {wind}"),
    ];
    lines.extend(report.daily.iter().map(|day| daily_line(day, prefs)));
    lines
}

fn daily_line(day: &DailyForecast, prefs: UnitPreference) -> String {
    let label = day
        .weather_code
        .map_or(MISSING, weather_label);
    let temp =
        |value: Option<f32>| value.map_or_else(|| MISSING.to_string(), |c| prefs.format_temp(c));
    let precip = day
        .precipitation_probability_max
        .map_or_else(|| MISSING.to_string(), |p| format!("{}%", p.round() as i32));

    format!(
        "{}  {:<20} {} / {}  precip {}",
        day.date.format("%Y-%m-%d"),
        label,
        temp(day.temperature_max_c),
        temp(day.temperature_min_c),
        precip
    )
}

pub fn render_history(records: &[QueryRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No saved queries".to_string()];
    }
    records
        .iter()
        .map(|record| {
            format!(
                "#{} {} ({} → {}): {}",
                record.id, record.location, record.start_date, record.end_date, record.summary
            )
        })
        .collect()
}
