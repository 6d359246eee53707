//! Weather API client for current conditions and forecasts
//!
//! Integrates with OpenWeatherMap: one current-conditions request and one
//! 5-day/3-hour forecast request, normalized into a single chronological
//! series with the current reading first.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use shared::models::{WeatherSample, WeatherSeries};
use shared::types::GpsCoordinates;

/// Weather API client
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap current-conditions response. `dt` and `main` are the
/// required fields; a payload missing either is unusable.
#[derive(Debug, Deserialize)]
pub struct OwmCurrentResponse {
    pub dt: i64,
    pub main: OwmMain,
    #[serde(default)]
    pub rain: Option<OwmRain>,
}

#[derive(Debug, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
}

/// Rain sub-object. The provider omits the whole object when no rain is
/// reported and may omit either bucket; both absences normalize to 0 mm.
#[derive(Debug, Default, Deserialize)]
pub struct OwmRain {
    #[serde(rename = "1h", default)]
    pub one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    pub three_hour: Option<f64>,
}

/// OpenWeatherMap forecast response
#[derive(Debug, Deserialize)]
pub struct OwmForecastResponse {
    pub list: Vec<OwmForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OwmForecastEntry {
    pub dt: i64,
    pub main: OwmMain,
    #[serde(default)]
    pub rain: Option<OwmRain>,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions for a position
    pub async fn get_current(&self, position: &GpsCoordinates) -> AppResult<OwmCurrentResponse> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, position.latitude, position.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Error fetching weather data: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Transport(format!(
                "Error fetching weather data: provider returned {}",
                status
            )));
        }

        response.json().await.map_err(|_| {
            AppError::UpstreamShape("Error: Could not fetch current weather data.".to_string())
        })
    }

    /// Fetch the 5-day/3-hour forecast for a position
    pub async fn get_forecast(&self, position: &GpsCoordinates) -> AppResult<OwmForecastResponse> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, position.latitude, position.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Error fetching weather data: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Transport(format!(
                "Error fetching weather data: provider returned {}",
                status
            )));
        }

        response.json().await.map_err(|_| {
            AppError::UpstreamShape("Error: Could not fetch forecast weather data.".to_string())
        })
    }
}

fn timestamp_utc(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
}

/// Assemble the combined series: the single current observation first,
/// then the forecast entries in provider order (already chronological).
pub fn assemble_series(
    current: OwmCurrentResponse,
    forecast: OwmForecastResponse,
) -> WeatherSeries {
    let mut samples = Vec::with_capacity(1 + forecast.list.len());

    samples.push(WeatherSample {
        observed_at: timestamp_utc(current.dt),
        temperature_c: current.main.temp,
        rain_mm: current
            .rain
            .as_ref()
            .and_then(|r| r.one_hour)
            .unwrap_or(0.0),
        is_forecast: false,
    });

    for entry in forecast.list {
        samples.push(WeatherSample {
            observed_at: timestamp_utc(entry.dt),
            temperature_c: entry.main.temp,
            rain_mm: entry
                .rain
                .as_ref()
                .and_then(|r| r.three_hour)
                .unwrap_or(0.0),
            is_forecast: true,
        });
    }

    WeatherSeries { samples }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_payload() -> OwmCurrentResponse {
        serde_json::from_value(json!({
            "dt": 1718000000,
            "main": { "temp": 24.5 },
            "rain": { "1h": 0.4 }
        }))
        .unwrap()
    }

    fn forecast_payload() -> OwmForecastResponse {
        serde_json::from_value(json!({
            "list": [
                { "dt": 1718010800, "main": { "temp": 23.0 }, "rain": { "3h": 1.2 } },
                { "dt": 1718021600, "main": { "temp": 21.5 } },
                { "dt": 1718032400, "main": { "temp": 20.0 }, "rain": {} }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_series_is_current_first_then_chronological() {
        let series = assemble_series(current_payload(), forecast_payload());

        assert_eq!(series.len(), 4);
        assert!(!series.samples[0].is_forecast);
        assert!(series.samples[1..].iter().all(|s| s.is_forecast));
        for pair in series.samples[1..].windows(2) {
            assert!(pair[0].observed_at <= pair[1].observed_at);
        }
    }

    #[test]
    fn test_series_length_is_one_plus_forecast_entries() {
        let forecast = forecast_payload();
        let entries = forecast.list.len();
        let series = assemble_series(current_payload(), forecast);
        assert_eq!(series.len(), 1 + entries);
    }

    #[test]
    fn test_missing_rain_defaults_to_zero() {
        let series = assemble_series(current_payload(), forecast_payload());
        // Absent rain object and empty rain object both normalize to 0
        assert_eq!(series.samples[2].rain_mm, 0.0);
        assert_eq!(series.samples[3].rain_mm, 0.0);
        // Present buckets pass through
        assert_eq!(series.samples[0].rain_mm, 0.4);
        assert_eq!(series.samples[1].rain_mm, 1.2);
    }

    #[test]
    fn test_current_payload_requires_dt_and_temp() {
        let missing_dt = serde_json::from_value::<OwmCurrentResponse>(json!({
            "main": { "temp": 24.5 }
        }));
        assert!(missing_dt.is_err());

        let missing_main = serde_json::from_value::<OwmCurrentResponse>(json!({
            "dt": 1718000000
        }));
        assert!(missing_main.is_err());
    }

    #[test]
    fn test_forecast_payload_requires_list() {
        let missing_list = serde_json::from_value::<OwmForecastResponse>(json!({
            "cnt": 40
        }));
        assert!(missing_list.is_err());
    }
}
