//! Route definitions for the Irrigation Advisory Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Location store
        .route(
            "/location",
            get(handlers::get_last_location).post(handlers::save_location),
        )
        // Crop/stage selection
        .route(
            "/crops/selection",
            get(handlers::get_latest_selection).post(handlers::save_selection),
        )
        // Weather acquisition (fetch + record)
        .route("/weather/forecast", get(handlers::get_forecast_weather))
        // Soil/ET acquisition (fetch + record)
        .route("/soil", get(handlers::get_soil_and_et))
        // Irrigation recommendation
        .route("/recommendation", get(handlers::get_recommendation))
        // Alert side channel
        .route("/notifications", get(handlers::list_notifications))
}
