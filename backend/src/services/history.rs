//! Time-series persistence: append-only history logs
//!
//! No dedup and no upsert. Repeated fetches accumulate duplicate rows;
//! history is a log, not a cache, and "latest" is always a derived query.

use sqlx::PgPool;

use crate::error::AppResult;
use shared::models::{SoilHistoryRow, WeatherSeries};

/// Service for the weather and soil/ET history logs
#[derive(Clone)]
pub struct HistoryService {
    db: PgPool,
}

impl HistoryService {
    /// Create a new HistoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Append every sample of a fetched weather series. Returns the number
    /// of rows written, which always equals the series length.
    pub async fn append_weather_samples(&self, series: &WeatherSeries) -> AppResult<u64> {
        let mut written = 0u64;
        for sample in &series.samples {
            sqlx::query(
                r#"
                INSERT INTO weather_history (observed_at, temperature_c, rain_mm, is_forecast)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(sample.observed_at)
            .bind(sample.temperature_c)
            .bind(sample.rain_mm)
            .bind(sample.is_forecast)
            .execute(&self.db)
            .await?;
            written += 1;
        }
        Ok(written)
    }

    /// Append soil/ET history rows (one per soil-moisture reading, ET
    /// null-padded by the caller's index pairing)
    pub async fn append_soil_rows(&self, rows: &[SoilHistoryRow]) -> AppResult<u64> {
        let mut written = 0u64;
        for row in rows {
            sqlx::query(
                r#"
                INSERT INTO soil_moisture_history (date, soil_moisture, evapotranspiration)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(row.date)
            .bind(row.soil_moisture)
            .bind(row.evapotranspiration)
            .execute(&self.db)
            .await?;
            written += 1;
        }
        Ok(written)
    }

    /// The most recently recorded non-null soil-moisture value. This is the
    /// single read the decision engine depends on.
    pub async fn latest_soil_moisture(&self) -> AppResult<Option<f64>> {
        let value = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT soil_moisture
            FROM soil_moisture_history
            WHERE soil_moisture IS NOT NULL
            ORDER BY date DESC, id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        Ok(value)
    }
}
