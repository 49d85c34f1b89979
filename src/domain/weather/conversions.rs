use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike};

use super::Units;

#[must_use]
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Rounds half away from zero (`2.5 -> 3`, `-2.5 -> -3`).
#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn round_wind_speed(kmh: f32) -> i32 {
    kmh.round() as i32
}

#[must_use]
pub const fn is_night_hour(hour: u32) -> bool {
    hour < 6 || hour >= 18
}

/// Hour of day for `timestamp`, or the current local hour when absent.
///
/// The hour is read from the clock written in the string itself, so
/// `2026-02-12T22:15:00+09:00` yields 22. Unparseable input yields `None`.
#[must_use]
pub fn extract_hour(timestamp: Option<&str>) -> Option<u32> {
    match timestamp {
        None => Some(Local::now().hour()),
        Some(value) => parse_timestamp(value).map(|time| time.hour()),
    }
}

#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| parse_date_and_hour(value))
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

// `2026-02-12T21`: chrono will not build a time without minutes.
fn parse_date_and_hour(value: &str) -> Option<NaiveDateTime> {
    let (date, rest) = value.split_at_checked(10)?;
    let hour = rest.strip_prefix(['T', ' '])?;
    if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    parse_date(date)?.and_hms_opt(hour.parse().ok()?, 0, 0)
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
