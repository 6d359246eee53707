//! Weather time-series models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized weather reading. The first sample of a fetched series is
/// always the current (non-forecast) observation; the remainder is the
/// provider's forecast horizon in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub observed_at: DateTime<Utc>,
    pub temperature_c: f64,
    pub rain_mm: f64,
    pub is_forecast: bool,
}

/// An ordered weather series, current reading first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSeries {
    pub samples: Vec<WeatherSample>,
}

impl WeatherSeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The current (non-forecast) reading, when present
    pub fn current(&self) -> Option<&WeatherSample> {
        self.samples.first().filter(|s| !s.is_forecast)
    }
}
