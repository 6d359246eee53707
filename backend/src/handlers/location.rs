//! HTTP handlers for the location store

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::LocationService;
use crate::AppState;
use shared::models::{Coordinate, LocationMethod};

/// Input for saving a captured coordinate
#[derive(Debug, Deserialize)]
pub struct SaveLocationInput {
    pub method: LocationMethod,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Save a newly captured coordinate
pub async fn save_location(
    State(state): State<AppState>,
    Json(input): Json<SaveLocationInput>,
) -> AppResult<Json<Coordinate>> {
    let service = LocationService::new(state.db);
    let coordinate = service
        .save_location(input.method, input.latitude, input.longitude)
        .await?;
    Ok(Json(coordinate))
}

/// Get the most recently saved coordinate
pub async fn get_last_location(State(state): State<AppState>) -> AppResult<Json<Coordinate>> {
    let service = LocationService::new(state.db);
    let coordinate = service
        .last_location()
        .await?
        .ok_or_else(|| AppError::NotFound("Location".to_string()))?;
    Ok(Json(coordinate))
}
