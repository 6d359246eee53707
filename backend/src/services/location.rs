//! Location store: the single source of truth for "where" all fetches apply
//!
//! Writes append a row per capture; reads return the row with the greatest
//! insertion order. No latitude/longitude range validation happens here —
//! invalid coordinates propagate downstream and surface as provider fetch
//! failures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};
use shared::models::{Coordinate, LocationMethod};

/// Service for the append-only location log
#[derive(Clone)]
pub struct LocationService {
    db: PgPool,
}

#[derive(Debug, FromRow)]
struct LocationRow {
    method: String,
    latitude: Decimal,
    longitude: Decimal,
    captured_at: DateTime<Utc>,
}

impl LocationRow {
    fn into_coordinate(self) -> AppResult<Coordinate> {
        let method = self
            .method
            .parse::<LocationMethod>()
            .map_err(|_| AppError::Internal(format!("Unknown location method: {}", self.method)))?;
        Ok(Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
            method,
            captured_at: self.captured_at,
        })
    }
}

impl LocationService {
    /// Create a new LocationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Append a newly captured coordinate
    pub async fn save_location(
        &self,
        method: LocationMethod,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<Coordinate> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            INSERT INTO locations (method, latitude, longitude)
            VALUES ($1, $2, $3)
            RETURNING method, latitude, longitude, captured_at
            "#,
        )
        .bind(method.to_string())
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.db)
        .await?;

        row.into_coordinate()
    }

    /// The most recently captured coordinate, if any
    pub async fn last_location(&self) -> AppResult<Option<Coordinate>> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT method, latitude, longitude, captured_at
            FROM locations
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        row.map(LocationRow::into_coordinate).transpose()
    }

    /// The latest coordinate, or the no-location-saved precondition error
    pub async fn require_location(&self) -> AppResult<Coordinate> {
        self.last_location()
            .await?
            .ok_or(AppError::NoLocationSaved)
    }
}
