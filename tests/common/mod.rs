#![allow(dead_code)]

use std::time::Duration;

use atmos_weather::{app::settings::RuntimeSettings, data::api::AtmosClient};
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> AtmosClient {
    AtmosClient::with_base_url(format!("{}/api", server.uri()), Duration::from_secs(5))
        .expect("client builds")
}

pub fn settings_for(server: &MockServer) -> RuntimeSettings {
    RuntimeSettings {
        api_url: format!("{}/api", server.uri()),
        ..RuntimeSettings::default()
    }
}

pub fn stockholm_payload() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Stockholm",
            "country": "Sweden",
            "latitude": 59.3293,
            "longitude": 18.0686
        },
        "weather": {
            "latitude": 59.33,
            "longitude": 18.07,
            "timezone": "Europe/Stockholm",
            "current": {
                "time": "2026-02-12T21:00",
                "interval": 900,
                "temperature_2m": -3.4,
                "relative_humidity_2m": 81,
                "apparent_temperature": -7.9,
                "weather_code": 2,
                "wind_speed_10m": 14.2
            },
            "daily": {
                "time": ["2026-02-12", "2026-02-13"],
                "weather_code": [2, 71],
                "temperature_2m_max": [-1.0, 0.5],
                "temperature_2m_min": [-6.2, -4.0],
                "precipitation_probability_max": [10, null]
            }
        }
    })
}

pub fn query_record(id: i64, location: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "location": location,
        "latitude": 59.91,
        "longitude": 10.75,
        "start_date": "2026-02-10",
        "end_date": "2026-02-12",
        "summary": "Temp: -2.1°C, Wind: 8.0 km/h",
        "created_at": "2026-02-12T10:15:30.123456"
    })
}
