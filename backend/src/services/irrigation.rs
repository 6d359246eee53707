//! Irrigation recommendation service
//!
//! Threads the latest crop/stage selection and the latest persisted soil
//! moisture into the pure decision engine, and emits a condensed alert
//! through the notification side channel when irrigation is triggered.
//! The engine itself raises nothing; every missing input folds into the
//! insufficient-data recommendation.

use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::{CropSelectionService, HistoryService, NotificationService};
use shared::irrigation::{alert_message, recommend, rule_for, Recommendation};
use shared::models::{Crop, GrowthStage};

const ALERT_TITLE: &str = "Irrigation Alert";

/// Irrigation recommendation service
#[derive(Clone)]
pub struct IrrigationService {
    db: PgPool,
}

impl IrrigationService {
    /// Create a new IrrigationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute the current recommendation from the latest selection and
    /// latest non-null soil moisture reading
    pub async fn current_recommendation(&self) -> AppResult<Recommendation> {
        let selection = CropSelectionService::new(self.db.clone())
            .latest_selection()
            .await?;
        let soil_moisture = HistoryService::new(self.db.clone())
            .latest_soil_moisture()
            .await?;

        let recommendation = recommend(
            selection.as_ref().map(|s| s.crop.as_str()),
            selection.as_ref().map(|s| s.growth_stage.as_str()),
            soil_moisture,
        );

        if recommendation.triggered {
            self.emit_alert(&recommendation).await;
        }

        Ok(recommendation)
    }

    /// Write the condensed alert. Failures here are logged and swallowed;
    /// they never invalidate the recommendation itself.
    async fn emit_alert(&self, recommendation: &Recommendation) {
        let parsed = recommendation
            .crop
            .as_deref()
            .and_then(|c| c.parse::<Crop>().ok())
            .zip(
                recommendation
                    .stage
                    .as_deref()
                    .and_then(|s| s.parse::<GrowthStage>().ok()),
            );

        let Some((crop, stage)) = parsed else {
            // A triggered recommendation always came from a known pair
            return;
        };
        let Some(rule) = rule_for(crop, stage) else {
            return;
        };

        let message = alert_message(crop, stage, rule);
        if let Err(e) = NotificationService::new(self.db.clone())
            .record(ALERT_TITLE, &message)
            .await
        {
            tracing::warn!("Failed to record irrigation alert: {}", e);
        }
    }
}
