//! HTTP handlers for crop/stage selection

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::CropSelectionService;
use crate::AppState;
use shared::models::CropStageSelection;

/// Input for saving a crop/stage selection
#[derive(Debug, Deserialize)]
pub struct SaveSelectionInput {
    pub crop: String,
    pub growth_stage: String,
}

/// Save a crop/stage selection
pub async fn save_selection(
    State(state): State<AppState>,
    Json(input): Json<SaveSelectionInput>,
) -> AppResult<Json<CropStageSelection>> {
    let service = CropSelectionService::new(state.db);
    let selection = service
        .save_selection(&input.crop, &input.growth_stage)
        .await?;
    Ok(Json(selection))
}

/// Get the latest crop/stage selection
pub async fn get_latest_selection(
    State(state): State<AppState>,
) -> AppResult<Json<CropStageSelection>> {
    let service = CropSelectionService::new(state.db);
    let selection = service
        .latest_selection()
        .await?
        .ok_or_else(|| AppError::NotFound("Crop selection".to_string()))?;
    Ok(Json(selection))
}
