//! HTTP handler for soil/ET acquisition

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::external::AgWeatherClient;
use crate::services::SoilService;
use crate::AppState;
use shared::models::SoilEtSeries;

/// Fetch the trailing soil/ET window for the saved location and record it
/// into the soil history log
pub async fn get_soil_and_et(State(state): State<AppState>) -> AppResult<Json<SoilEtSeries>> {
    let client = AgWeatherClient::new(
        state.config.agweather.api_key.clone(),
        state.config.agweather.api_endpoint.clone(),
    );
    let service = SoilService::new(state.db, client);
    let series = service.fetch_and_record().await?;
    Ok(Json(series))
}
