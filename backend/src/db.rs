//! Schema setup for the append-only history tables
//!
//! All tables are logs: surrogate auto-increment ids, insert-only access,
//! no foreign keys. "Latest" is always a derived query (max timestamp or
//! id), never a stored flag. Setup is idempotent and runs at startup.

use sqlx::PgPool;

use crate::error::AppResult;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS locations (
        id BIGSERIAL PRIMARY KEY,
        method TEXT NOT NULL,
        latitude NUMERIC NOT NULL,
        longitude NUMERIC NOT NULL,
        captured_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS crop_selections (
        id BIGSERIAL PRIMARY KEY,
        crop TEXT NOT NULL,
        growth_stage TEXT NOT NULL,
        selected_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS weather_history (
        id BIGSERIAL PRIMARY KEY,
        observed_at TIMESTAMPTZ NOT NULL,
        temperature_c DOUBLE PRECISION NOT NULL,
        rain_mm DOUBLE PRECISION NOT NULL,
        is_forecast BOOLEAN NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS soil_moisture_history (
        id BIGSERIAL PRIMARY KEY,
        date DATE NOT NULL,
        soil_moisture DOUBLE PRECISION,
        evapotranspiration DOUBLE PRECISION
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS notifications (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        message TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Create all tables if absent
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
