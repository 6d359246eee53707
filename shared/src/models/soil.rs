//! Soil moisture and evapotranspiration time-series models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Two sparse daily series sharing a date axis. A provider entry may
/// contribute to one, both, or neither series; absent values are never
/// fabricated, so the two series may differ in length. Within each series
/// the date and value vectors always stay the same length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilEtSeries {
    pub soil_dates: Vec<NaiveDate>,
    pub soil_moisture: Vec<f64>,
    pub et_dates: Vec<NaiveDate>,
    pub et_values: Vec<f64>,
}

/// One row of the persisted soil/ET history log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilHistoryRow {
    pub date: NaiveDate,
    pub soil_moisture: f64,
    pub evapotranspiration: Option<f64>,
}

impl SoilEtSeries {
    pub fn push_soil(&mut self, date: NaiveDate, moisture: f64) {
        self.soil_dates.push(date);
        self.soil_moisture.push(moisture);
    }

    pub fn push_et(&mut self, date: NaiveDate, et: f64) {
        self.et_dates.push(date);
        self.et_values.push(et);
    }

    pub fn is_empty(&self) -> bool {
        self.soil_dates.is_empty() && self.et_dates.is_empty()
    }

    /// Pair the series into persistable rows: one row per soil-moisture
    /// entry, ET matched by index position and padded with `None` when the
    /// ET series is shorter.
    pub fn history_rows(&self) -> Vec<SoilHistoryRow> {
        self.soil_dates
            .iter()
            .zip(self.soil_moisture.iter())
            .enumerate()
            .map(|(i, (date, moisture))| SoilHistoryRow {
                date: *date,
                soil_moisture: *moisture,
                evapotranspiration: self.et_values.get(i).copied(),
            })
            .collect()
    }
}
