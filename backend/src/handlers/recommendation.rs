//! HTTP handler for irrigation recommendations

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::IrrigationService;
use crate::AppState;
use shared::irrigation::Recommendation;

/// Compute the current irrigation recommendation from the latest selection
/// and latest soil moisture reading
pub async fn get_recommendation(
    State(state): State<AppState>,
) -> AppResult<Json<Recommendation>> {
    let service = IrrigationService::new(state.db);
    let recommendation = service.current_recommendation().await?;
    Ok(Json(recommendation))
}
