//! Crop and growth stage models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported crops. Selections are stored as text so future crops survive
/// the storage layer; an unknown crop folds into the engine's
/// insufficient-data outcome rather than an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Crop {
    Tomato,
    Cabbage,
    Carrot,
    Sukuma,
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Crop::Tomato => "Tomato",
            Crop::Cabbage => "Cabbage",
            Crop::Carrot => "Carrot",
            Crop::Sukuma => "Sukuma",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Crop {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tomato" => Ok(Crop::Tomato),
            "cabbage" => Ok(Crop::Cabbage),
            "carrot" => Ok(Crop::Carrot),
            "sukuma" => Ok(Crop::Sukuma),
            _ => Err(()),
        }
    }
}

/// Crop development phase with distinct water needs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GrowthStage {
    Initial,
    Development,
    MidSeason,
    Late,
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GrowthStage::Initial => "Initial",
            GrowthStage::Development => "Development",
            GrowthStage::MidSeason => "Mid-season",
            GrowthStage::Late => "Late",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GrowthStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "initial" => Ok(GrowthStage::Initial),
            "development" => Ok(GrowthStage::Development),
            "mid-season" | "midseason" | "mid season" => Ok(GrowthStage::MidSeason),
            "late" => Ok(GrowthStage::Late),
            _ => Err(()),
        }
    }
}

/// A crop/stage selection. Append-only; the latest row by `selected_at`
/// is the active selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropStageSelection {
    pub crop: String,
    pub growth_stage: String,
    pub selected_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_round_trip() {
        for crop in [Crop::Tomato, Crop::Cabbage, Crop::Carrot, Crop::Sukuma] {
            let parsed: Crop = crop.to_string().parse().unwrap();
            assert_eq!(parsed, crop);
        }
    }

    #[test]
    fn test_stage_parsing_tolerant() {
        assert_eq!("mid-season".parse::<GrowthStage>(), Ok(GrowthStage::MidSeason));
        assert_eq!("Mid-season".parse::<GrowthStage>(), Ok(GrowthStage::MidSeason));
        assert_eq!("initial".parse::<GrowthStage>(), Ok(GrowthStage::Initial));
    }

    #[test]
    fn test_unknown_crop_rejected() {
        assert!("Kale".parse::<Crop>().is_err());
    }
}
