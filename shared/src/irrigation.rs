//! Irrigation decision engine
//!
//! A pure, table-driven function: (crop, growth stage, latest soil moisture)
//! against a static rule table and an efficiency-ordered irrigation method
//! list. Missing or unknown inputs are not errors; they fold into an
//! "insufficient data" recommendation.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Crop, GrowthStage};

/// Trigger threshold range and daily water volume for one crop/stage pair.
/// The low bound gates irrigation; the high bound is used in messaging only.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IrrigationRule {
    pub trigger_low_pct: f64,
    pub trigger_high_pct: f64,
    /// Litres per plant per day, display-formatted (e.g. "0.18–0.27")
    pub water_range: &'static str,
}

/// A water delivery method and the fraction of applied water that reaches
/// the root zone
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IrrigationMethod {
    pub name: &'static str,
    pub efficiency: f64,
}

/// The recommendation handed to the presentation layer. Ephemeral:
/// recomputed on demand, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub crop: Option<String>,
    pub stage: Option<String>,
    pub soil_moisture_pct: Option<f64>,
    pub triggered: bool,
    pub message: String,
    pub method: Option<IrrigationMethod>,
}

pub const INSUFFICIENT_DATA_MESSAGE: &str = "Insufficient data for recommendation.";

/// Crop/stage rule table. Static reference data, loaded once and never
/// mutated at runtime.
static RULE_TABLE: Lazy<HashMap<(Crop, GrowthStage), IrrigationRule>> = Lazy::new(|| {
    use Crop::*;
    use GrowthStage::*;

    let rule = |low: f64, high: f64, water: &'static str| IrrigationRule {
        trigger_low_pct: low,
        trigger_high_pct: high,
        water_range: water,
    };

    HashMap::from([
        ((Tomato, Initial), rule(70.0, 80.0, "0.18–0.27")),
        ((Tomato, Development), rule(60.0, 70.0, "0.27–0.45")),
        ((Tomato, MidSeason), rule(70.0, 80.0, "0.45–0.72")),
        ((Tomato, Late), rule(50.0, 60.0, "0.18–0.36")),
        ((Cabbage, Initial), rule(70.0, 80.0, "0.18–0.36")),
        ((Cabbage, Development), rule(60.0, 70.0, "0.36–0.54")),
        ((Cabbage, MidSeason), rule(70.0, 80.0, "0.54–0.72")),
        ((Cabbage, Late), rule(50.0, 60.0, "0.27–0.45")),
        ((Carrot, Initial), rule(70.0, 80.0, "0.18–0.27")),
        ((Carrot, Development), rule(60.0, 70.0, "0.27–0.45")),
        ((Carrot, MidSeason), rule(70.0, 80.0, "0.36–0.54")),
        ((Carrot, Late), rule(50.0, 60.0, "0.18–0.36")),
        ((Sukuma, Initial), rule(70.0, 80.0, "0.18–0.36")),
        ((Sukuma, Development), rule(60.0, 70.0, "0.27–0.45")),
        ((Sukuma, MidSeason), rule(70.0, 80.0, "0.45–0.63")),
        ((Sukuma, Late), rule(50.0, 60.0, "0.27–0.45")),
    ])
});

/// Delivery methods ordered from highest to lowest efficiency. The engine
/// always recommends the head of the list.
pub static IRRIGATION_METHODS: &[IrrigationMethod] = &[
    IrrigationMethod { name: "Drip", efficiency: 0.90 },
    IrrigationMethod { name: "Laser Spray", efficiency: 0.80 },
    IrrigationMethod { name: "Sprinkler", efficiency: 0.75 },
    IrrigationMethod { name: "Furrow", efficiency: 0.60 },
];

/// Look up the rule for a crop/stage pair
pub fn rule_for(crop: Crop, stage: GrowthStage) -> Option<&'static IrrigationRule> {
    RULE_TABLE.get(&(crop, stage))
}

/// The method recommended when irrigation is triggered
pub fn recommended_method() -> &'static IrrigationMethod {
    &IRRIGATION_METHODS[0]
}

fn insufficient_data(
    crop: Option<&str>,
    stage: Option<&str>,
    soil_moisture_pct: Option<f64>,
) -> Recommendation {
    Recommendation {
        crop: crop.map(str::to_owned),
        stage: stage.map(str::to_owned),
        soil_moisture_pct,
        triggered: false,
        message: INSUFFICIENT_DATA_MESSAGE.to_string(),
        method: None,
    }
}

/// Compute the irrigation recommendation for the given selection and latest
/// soil moisture reading.
///
/// Total over all inputs: unknown crops or stages and missing readings
/// produce the insufficient-data outcome rather than an error. The trigger
/// decision compares strictly against the rule's low bound; soil moisture is
/// taken as-is, with no range clamping.
pub fn recommend(
    crop: Option<&str>,
    stage: Option<&str>,
    soil_moisture_pct: Option<f64>,
) -> Recommendation {
    let (Some(crop_name), Some(stage_name), Some(moisture)) = (crop, stage, soil_moisture_pct)
    else {
        return insufficient_data(crop, stage, soil_moisture_pct);
    };

    let (Ok(parsed_crop), Ok(parsed_stage)) =
        (crop_name.parse::<Crop>(), stage_name.parse::<GrowthStage>())
    else {
        return insufficient_data(crop, stage, soil_moisture_pct);
    };

    let Some(rule) = rule_for(parsed_crop, parsed_stage) else {
        return insufficient_data(crop, stage, soil_moisture_pct);
    };

    if moisture < rule.trigger_low_pct {
        let method = recommended_method();
        let message = format!(
            "Soil moisture is {:.1}%, which is below the recommended {}-{}%\n\
             Irrigate with approx. {} litres per plant per day.\n\
             Recommended irrigation type: {} (Efficiency: {}%)",
            moisture,
            rule.trigger_low_pct,
            rule.trigger_high_pct,
            rule.water_range,
            method.name,
            (method.efficiency * 100.0) as i32,
        );
        Recommendation {
            crop: Some(crop_name.to_owned()),
            stage: Some(stage_name.to_owned()),
            soil_moisture_pct: Some(moisture),
            triggered: true,
            message,
            method: Some(method.clone()),
        }
    } else {
        Recommendation {
            crop: Some(crop_name.to_owned()),
            stage: Some(stage_name.to_owned()),
            soil_moisture_pct: Some(moisture),
            triggered: false,
            message: format!(
                "Soil moisture is {:.1}%. No irrigation needed at this stage.",
                moisture
            ),
            method: None,
        }
    }
}

/// Condensed alert text for the notification side channel
pub fn alert_message(crop: Crop, stage: GrowthStage, rule: &IrrigationRule) -> String {
    format!(
        "{} ({}): Soil moisture low! Irrigate with {} L/plant/day using {}.",
        crop,
        stage,
        rule.water_range,
        recommended_method().name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tomato_initial_triggers_below_low_bound() {
        let rec = recommend(Some("Tomato"), Some("Initial"), Some(65.0));
        assert!(rec.triggered);
        let method = rec.method.expect("triggered recommendation carries a method");
        assert_eq!(method.name, "Drip");
        assert_eq!(method.efficiency, 0.90);
        assert!(rec.message.contains("65.0"));
        assert!(rec.message.contains("0.18–0.27"));
        assert!(rec.message.contains("70-80%"));
        assert!(rec.message.contains("Efficiency: 90%"));
    }

    #[test]
    fn test_tomato_initial_no_irrigation_at_or_above_low_bound() {
        let rec = recommend(Some("Tomato"), Some("Initial"), Some(85.0));
        assert!(!rec.triggered);
        assert!(rec.method.is_none());
        assert!(rec.message.contains("85.0"));
        assert!(rec.message.contains("No irrigation needed"));

        // Boundary: exactly the low bound does not trigger
        let boundary = recommend(Some("Tomato"), Some("Initial"), Some(70.0));
        assert!(!boundary.triggered);
    }

    #[test]
    fn test_unknown_crop_is_insufficient_data() {
        let rec = recommend(Some("Kale"), Some("Initial"), Some(50.0));
        assert!(!rec.triggered);
        assert_eq!(rec.message, INSUFFICIENT_DATA_MESSAGE);
        assert!(rec.method.is_none());
    }

    #[test]
    fn test_absent_inputs_are_insufficient_data() {
        let rec = recommend(None, None, None);
        assert!(!rec.triggered);
        assert_eq!(rec.message, INSUFFICIENT_DATA_MESSAGE);

        let rec = recommend(Some("Tomato"), Some("Initial"), None);
        assert_eq!(rec.message, INSUFFICIENT_DATA_MESSAGE);

        let rec = recommend(Some("Tomato"), None, Some(50.0));
        assert_eq!(rec.message, INSUFFICIENT_DATA_MESSAGE);
    }

    #[test]
    fn test_deterministic() {
        let a = recommend(Some("Cabbage"), Some("Late"), Some(42.3));
        let b = recommend(Some("Cabbage"), Some("Late"), Some(42.3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_range_moisture_compared_as_is() {
        // The engine does not clamp: a negative reading is simply below any
        // low bound, and > 100 is simply above.
        assert!(recommend(Some("Carrot"), Some("Late"), Some(-5.0)).triggered);
        assert!(!recommend(Some("Carrot"), Some("Late"), Some(130.0)).triggered);
    }

    #[test]
    fn test_methods_ordered_by_descending_efficiency() {
        for pair in IRRIGATION_METHODS.windows(2) {
            assert!(pair[0].efficiency > pair[1].efficiency);
        }
        assert_eq!(recommended_method().name, "Drip");
    }

    #[test]
    fn test_rule_table_covers_all_crop_stage_pairs() {
        use Crop::*;
        use GrowthStage::*;
        for crop in [Tomato, Cabbage, Carrot, Sukuma] {
            for stage in [Initial, Development, MidSeason, Late] {
                let rule = rule_for(crop, stage).expect("rule exists");
                assert!(rule.trigger_low_pct < rule.trigger_high_pct);
            }
        }
    }

    #[test]
    fn test_alert_message_format() {
        let rule = rule_for(Crop::Tomato, GrowthStage::Initial).unwrap();
        let msg = alert_message(Crop::Tomato, GrowthStage::Initial, rule);
        assert_eq!(
            msg,
            "Tomato (Initial): Soil moisture low! Irrigate with 0.18–0.27 L/plant/day using Drip."
        );
    }
}
