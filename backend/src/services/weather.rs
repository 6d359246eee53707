//! Weather acquisition: current conditions plus the forecast horizon
//!
//! Two provider requests are normalized into one chronological series with
//! the current reading first. Acquisition failures surface to the caller;
//! failures of the write-behind into history are logged and swallowed so
//! they never invalidate a successful fetch.

use sqlx::PgPool;

use crate::error::AppResult;
use crate::external::openweather::{assemble_series, OpenWeatherClient};
use crate::services::{HistoryService, LocationService};
use shared::models::WeatherSeries;

/// Weather acquisition service
#[derive(Clone)]
pub struct WeatherService {
    db: PgPool,
    client: OpenWeatherClient,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(db: PgPool, client: OpenWeatherClient) -> Self {
        Self { db, client }
    }

    /// Fetch and assemble the current + forecast series for the last saved
    /// location. Fails when no location is saved, when either payload lacks
    /// its required fields, or when transport fails; never retried here.
    pub async fn fetch_forecast(&self) -> AppResult<WeatherSeries> {
        let location = LocationService::new(self.db.clone())
            .require_location()
            .await?;
        let position = location.position();

        let current = self.client.get_current(&position).await?;
        let forecast = self.client.get_forecast(&position).await?;

        Ok(assemble_series(current, forecast))
    }

    /// Fetch the series and append it to the weather history log
    pub async fn fetch_and_record(&self) -> AppResult<WeatherSeries> {
        let series = self.fetch_forecast().await?;

        let history = HistoryService::new(self.db.clone());
        match history.append_weather_samples(&series).await {
            Ok(written) => tracing::debug!("Recorded {} weather samples", written),
            Err(e) => tracing::warn!("Failed to record weather history: {}", e),
        }

        Ok(series)
    }
}
