//! Time-series invariant tests
//!
//! Covers the normalized series shapes the acquisition pipeline promises:
//! - weather: current reading first, forecast tail in chronological order
//! - soil/ET: parallel date/value arrays never desynchronize, and the
//!   persisted rows pair ET by index with null padding

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use shared::models::{SoilEtSeries, WeatherSample, WeatherSeries};

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

// ============================================================================
// Weather series
// ============================================================================

fn build_series(current_temp: f64, forecast: &[(i64, f64, f64)]) -> WeatherSeries {
    let mut samples = vec![WeatherSample {
        observed_at: ts(1_718_000_000),
        temperature_c: current_temp,
        rain_mm: 0.0,
        is_forecast: false,
    }];
    for (dt, temp, rain) in forecast {
        samples.push(WeatherSample {
            observed_at: ts(*dt),
            temperature_c: *temp,
            rain_mm: *rain,
            is_forecast: true,
        });
    }
    WeatherSeries { samples }
}

#[test]
fn test_current_accessor_requires_non_forecast_head() {
    let series = build_series(24.0, &[(1_718_010_800, 22.0, 0.4)]);
    assert!(series.current().is_some());

    let forecast_only = WeatherSeries {
        samples: vec![WeatherSample {
            observed_at: ts(1_718_010_800),
            temperature_c: 22.0,
            rain_mm: 0.0,
            is_forecast: true,
        }],
    };
    assert!(forecast_only.current().is_none());
}

proptest! {
    /// len == 1 + forecast entries, head is the current reading, and the
    /// forecast tail is non-decreasing in time when built from ordered input
    #[test]
    fn prop_weather_series_shape(
        current_temp in -20.0..45.0f64,
        steps in prop::collection::vec((0.0..40.0f64, 0.0..30.0f64), 0..40)
    ) {
        let forecast: Vec<(i64, f64, f64)> = steps
            .iter()
            .enumerate()
            .map(|(i, (temp, rain))| (1_718_000_000 + ((i as i64) + 1) * 10_800, *temp, *rain))
            .collect();
        let series = build_series(current_temp, &forecast);

        prop_assert_eq!(series.len(), 1 + forecast.len());
        prop_assert!(!series.samples[0].is_forecast);
        for pair in series.samples[1..].windows(2) {
            prop_assert!(pair[0].observed_at <= pair[1].observed_at);
        }
    }
}

// ============================================================================
// Soil/ET series
// ============================================================================

#[test]
fn test_soil_history_rows_index_pairing() {
    let mut series = SoilEtSeries::default();
    series.push_soil(date(1), 44.0);
    series.push_soil(date(2), 43.1);
    series.push_soil(date(3), 41.7);
    series.push_et(date(2), 3.1);

    let rows = series.history_rows();
    assert_eq!(rows.len(), 3);
    // Index pairing, not date pairing: the first ET value lands on the
    // first soil row even though its date differs.
    assert_eq!(rows[0].evapotranspiration, Some(3.1));
    assert_eq!(rows[1].evapotranspiration, None);
    assert_eq!(rows[2].evapotranspiration, None);
}

proptest! {
    /// Parallel arrays never desynchronize and rows always match the soil
    /// series length, padding with None exactly where ET runs out
    #[test]
    fn prop_soil_series_invariants(
        moisture in prop::collection::vec(0.0..100.0f64, 0..10),
        et in prop::collection::vec(0.0..12.0f64, 0..10)
    ) {
        let mut series = SoilEtSeries::default();
        for (i, m) in moisture.iter().enumerate() {
            series.push_soil(date((i + 1) as u32), *m);
        }
        for (i, e) in et.iter().enumerate() {
            series.push_et(date((i + 1) as u32), *e);
        }

        prop_assert_eq!(series.soil_dates.len(), series.soil_moisture.len());
        prop_assert_eq!(series.et_dates.len(), series.et_values.len());

        let rows = series.history_rows();
        prop_assert_eq!(rows.len(), moisture.len());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.evapotranspiration, et.get(i).copied());
        }
    }
}
