//! Crop/stage selection log
//!
//! Selections are stored as text so crops added later survive the storage
//! layer; only the latest row by timestamp is the active selection.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::error::AppResult;
use shared::models::CropStageSelection;

/// Service for the append-only crop/stage selection log
#[derive(Clone)]
pub struct CropSelectionService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct SelectionRow {
    crop: String,
    growth_stage: String,
    selected_at: DateTime<Utc>,
}

impl From<SelectionRow> for CropStageSelection {
    fn from(row: SelectionRow) -> Self {
        CropStageSelection {
            crop: row.crop,
            growth_stage: row.growth_stage,
            selected_at: row.selected_at,
        }
    }
}

impl CropSelectionService {
    /// Create a new CropSelectionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Append a new selection with the current timestamp
    pub async fn save_selection(
        &self,
        crop: &str,
        growth_stage: &str,
    ) -> AppResult<CropStageSelection> {
        let row = sqlx::query_as::<_, SelectionRow>(
            r#"
            INSERT INTO crop_selections (crop, growth_stage)
            VALUES ($1, $2)
            RETURNING crop, growth_stage, selected_at
            "#,
        )
        .bind(crop)
        .bind(growth_stage)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// The latest selection by timestamp, if any
    pub async fn latest_selection(&self) -> AppResult<Option<CropStageSelection>> {
        let row = sqlx::query_as::<_, SelectionRow>(
            r#"
            SELECT crop, growth_stage, selected_at
            FROM crop_selections
            ORDER BY selected_at DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Into::into))
    }
}
