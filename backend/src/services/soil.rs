//! Soil moisture / evapotranspiration acquisition
//!
//! One historical-agweather request over a trailing 5-day window ending
//! today (UTC), normalized into two sparse date-keyed series and appended
//! to the soil history log.

use chrono::{Days, NaiveDate, Utc};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::external::agweather::{assemble_soil_series, AgWeatherClient};
use crate::services::{HistoryService, LocationService};
use shared::models::SoilEtSeries;
use shared::types::DateRange;

/// Number of trailing calendar days fetched, inclusive of today
const WINDOW_DAYS: u64 = 5;

/// Soil/ET acquisition service
#[derive(Clone)]
pub struct SoilService {
    db: PgPool,
    client: AgWeatherClient,
}

/// The trailing fetch window: `[today - (days-1), today]`, inclusive
pub fn trailing_window(today: NaiveDate, days: u64) -> DateRange {
    DateRange {
        start: today
            .checked_sub_days(Days::new(days.saturating_sub(1)))
            .unwrap_or(today),
        end: today,
    }
}

impl SoilService {
    /// Create a new SoilService instance
    pub fn new(db: PgPool, client: AgWeatherClient) -> Self {
        Self { db, client }
    }

    /// Fetch the trailing window of soil/ET readings for the last saved
    /// location and append them to the history log. Persistence failures
    /// are logged and swallowed; the fetched series is returned regardless.
    pub async fn fetch_and_record(&self) -> AppResult<SoilEtSeries> {
        let location = LocationService::new(self.db.clone())
            .require_location()
            .await?;

        let window = trailing_window(Utc::now().date_naive(), WINDOW_DAYS);
        let response = self
            .client
            .get_history(&location.position(), &window)
            .await?;

        let series = assemble_soil_series(response.data);

        let rows = series.history_rows();
        let history = HistoryService::new(self.db.clone());
        match history.append_soil_rows(&rows).await {
            Ok(written) => tracing::debug!("Recorded {} soil history rows", written),
            Err(e) => tracing::warn!("Failed to record soil history: {}", e),
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_is_five_days_inclusive_of_today() {
        let window = trailing_window(date(2025, 6, 10), WINDOW_DAYS);
        assert_eq!(window.start, date(2025, 6, 6));
        assert_eq!(window.end, date(2025, 6, 10));
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let window = trailing_window(date(2025, 7, 2), WINDOW_DAYS);
        assert_eq!(window.start, date(2025, 6, 28));
        assert_eq!(window.end, date(2025, 7, 2));
    }
}
