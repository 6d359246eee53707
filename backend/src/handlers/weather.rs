//! HTTP handler for weather acquisition

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::external::OpenWeatherClient;
use crate::services::WeatherService;
use crate::AppState;
use shared::models::WeatherSeries;

/// Fetch the current + forecast series for the saved location and record
/// it into the weather history log
pub async fn get_forecast_weather(
    State(state): State<AppState>,
) -> AppResult<Json<WeatherSeries>> {
    let client = OpenWeatherClient::new(
        state.config.openweather.api_key.clone(),
        state.config.openweather.api_endpoint.clone(),
    );
    let service = WeatherService::new(state.db, client);
    let series = service.fetch_and_record().await?;
    Ok(Json(series))
}
