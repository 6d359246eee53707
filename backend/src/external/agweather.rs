//! Agricultural weather history client
//!
//! Integrates with the Weatherbit AgWeather history endpoint for daily
//! topsoil-moisture and evapotranspiration readings over a trailing window.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use shared::models::SoilEtSeries;
use shared::types::{DateRange, GpsCoordinates};

/// AgWeather history API client
#[derive(Clone)]
pub struct AgWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Weatherbit AgWeather history response
#[derive(Debug, Deserialize)]
pub struct AgWeatherResponse {
    pub data: Vec<AgWeatherEntry>,
}

/// One daily entry. Every field is optional upstream; an entry may carry
/// moisture, ET, both, or neither.
#[derive(Debug, Deserialize)]
pub struct AgWeatherEntry {
    #[serde(default)]
    pub valid_date: Option<NaiveDate>,
    #[serde(rename = "soilm_0_10cm", default)]
    pub soil_moisture: Option<f64>,
    #[serde(default)]
    pub evapotranspiration: Option<f64>,
}

impl AgWeatherClient {
    /// Create a new AgWeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch daily soil/ET history for a position over an inclusive date
    /// range
    pub async fn get_history(
        &self,
        position: &GpsCoordinates,
        range: &DateRange,
    ) -> AppResult<AgWeatherResponse> {
        let url = format!(
            "{}/history/agweather?lat={}&lon={}&start_date={}&end_date={}&key={}",
            self.base_url, position.latitude, position.longitude, range.start, range.end,
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Error fetching soil data: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Transport(format!(
                "Error fetching soil data: provider returned {}",
                status
            )));
        }

        let data: AgWeatherResponse = response.json().await.map_err(|_| {
            AppError::UpstreamShape("No soil moisture data available.".to_string())
        })?;

        if data.data.is_empty() {
            return Err(AppError::UpstreamShape(
                "No soil moisture data available.".to_string(),
            ));
        }

        Ok(data)
    }
}

/// Assemble the two sparse series. Each dated entry contributes to the
/// soil series when moisture is present and to the ET series when ET is
/// present; missing values are never fabricated.
pub fn assemble_soil_series(entries: Vec<AgWeatherEntry>) -> SoilEtSeries {
    let mut series = SoilEtSeries::default();

    for entry in entries {
        let Some(date) = entry.valid_date else {
            continue;
        };
        if let Some(moisture) = entry.soil_moisture {
            series.push_soil(date, moisture);
        }
        if let Some(et) = entry.evapotranspiration {
            series.push_et(date, et);
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries() -> Vec<AgWeatherEntry> {
        let response: AgWeatherResponse = serde_json::from_value(json!({
            "data": [
                { "valid_date": "2025-06-01", "soilm_0_10cm": 42.0, "evapotranspiration": 3.2 },
                { "valid_date": "2025-06-02", "soilm_0_10cm": 40.5 },
                { "valid_date": "2025-06-03", "evapotranspiration": 3.6 },
                { "soilm_0_10cm": 38.0, "evapotranspiration": 3.8 },
                { "valid_date": "2025-06-05" }
            ]
        }))
        .unwrap();
        response.data
    }

    #[test]
    fn test_sparse_entries_populate_independent_series() {
        let series = assemble_soil_series(entries());

        // Dated moisture on days 1 and 2; dated ET on days 1 and 3. The
        // undated entry and the empty entry contribute nothing.
        assert_eq!(series.soil_moisture, vec![42.0, 40.5]);
        assert_eq!(series.et_values, vec![3.2, 3.6]);
        assert_eq!(series.soil_dates.len(), series.soil_moisture.len());
        assert_eq!(series.et_dates.len(), series.et_values.len());
    }

    #[test]
    fn test_entry_without_date_is_skipped() {
        let series = assemble_soil_series(entries());
        assert!(!series.soil_moisture.contains(&38.0));
        assert!(!series.et_values.contains(&3.8));
    }

    #[test]
    fn test_response_requires_data_list() {
        let missing = serde_json::from_value::<AgWeatherResponse>(json!({
            "count": 0
        }));
        assert!(missing.is_err());
    }
}
