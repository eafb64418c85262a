use super::explanation;
use super::factors::{rainfall_factor, stage_factor, temperature_factor};
use super::risks;
use super::tables;
use super::{round_tenth, Advisor};
use crate::models::{
    Crop, CropStage, DecisionInput, DecisionResult, IrrigationMethod, SoilProfile, SoilType,
};
use tracing::debug;

/// Assumed delivery rate used to turn millimetres into run time
pub const DELIVERY_RATE_MM_PER_HOUR: f64 = 10.0;

/// Applications at or below this amount are not worth running
pub const MIN_APPLICATION_MM: f64 = 1.0;

/// Millimetres added per percentage point of moisture deficit
pub const DEFICIT_COMPENSATION_MM: f64 = 0.5;

/// A request with its categories resolved against the reference tables.
///
/// `soil_name` keeps the normalized text the caller sent, so explanations
/// echo it even when the soil fell back to the loam profile.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConditions {
    pub soil_name: String,
    pub soil: Option<SoilType>,
    pub crop: Option<Crop>,
    pub stage: Option<CropStage>,
    pub profile: SoilProfile,
    pub moisture_pct: f64,
    pub temperature_c: f64,
    pub rainfall_probability_pct: f64,
}

impl FieldConditions {
    pub fn resolve(input: &DecisionInput) -> Self {
        let soil_name = input.soil_type.trim().to_lowercase();
        let soil = SoilType::from_str(&soil_name);
        let crop = Crop::from_str(&input.crop_name);
        let stage = CropStage::from_str(&input.crop_stage);

        if soil.is_none() {
            debug!(soil = %soil_name, "Unknown soil type, using loam profile");
        }
        if crop.is_none() {
            debug!(crop = %input.crop_name.trim(), "Unknown crop, using wheat water curve");
        }
        if stage.is_none() {
            debug!(
                stage = %input.crop_stage.trim(),
                "Unknown crop stage, using flat {} mm/day",
                tables::DEFAULT_DAILY_WATER_MM
            );
        }

        Self {
            soil_name,
            soil,
            crop,
            stage,
            profile: tables::soil_profile(soil),
            moisture_pct: input.current_moisture_pct,
            temperature_c: input.temperature_c,
            rainfall_probability_pct: input.rainfall_probability_pct,
        }
    }

    pub fn is_flowering(&self) -> bool {
        self.stage.is_some_and(|s| s.is_flowering())
    }
}

/// Deterministic irrigation decision engine.
///
/// Evaluation order:
/// 1. Saturation guard: moisture above saturation returns a terminal
///    "do not irrigate" result and skips every other computation.
/// 2. Quantity: crop need adjusted for temperature and stage, plus half a
///    millimetre per point of deficit, attenuated by rain probability.
/// 3. Need: only when moisture is below the optimal band and more than
///    1 mm is left after attenuation. Otherwise the quantity is discarded.
pub struct IrrigationAdvisor;

impl IrrigationAdvisor {
    pub fn decide(&self, input: &DecisionInput) -> DecisionResult {
        let field = FieldConditions::resolve(input);
        let method = tables::irrigation_method(field.crop);

        if field.profile.is_saturated(field.moisture_pct) {
            debug!(
                moisture = field.moisture_pct,
                saturation = field.profile.saturation,
                "Soil saturated, skipping irrigation"
            );
            return saturated_result(&field, method);
        }

        let daily_need = tables::daily_water_need_mm(field.crop, field.stage);
        let base_water_mm = daily_need
            * temperature_factor(field.temperature_c)
            * stage_factor(field.stage)
            + field.profile.moisture_deficit(field.moisture_pct) * DEFICIT_COMPENSATION_MM;
        let attenuated_mm = base_water_mm * rainfall_factor(field.rainfall_probability_pct);

        // Infinite inputs produce no finite amount to apply
        let need_irrigation = field.profile.is_below_optimal(field.moisture_pct)
            && attenuated_mm.is_finite()
            && attenuated_mm > MIN_APPLICATION_MM
            && field.moisture_pct <= field.profile.saturation;

        let water_required_mm = if need_irrigation {
            round_tenth(attenuated_mm)
        } else {
            0.0
        };

        debug!(
            daily_need,
            base_water_mm,
            attenuated_mm,
            need_irrigation,
            water_required_mm,
            "Irrigation decision computed"
        );

        DecisionResult {
            need_irrigation,
            water_required_mm,
            duration_minutes: duration_minutes(water_required_mm),
            frequency_days: tables::irrigation_frequency_days(field.soil),
            irrigation_method: method,
            risks: risks::risk_messages(&risks::identify_risks(&field)),
            explanation: explanation::explain(&field, need_irrigation, water_required_mm),
        }
    }
}

impl Advisor for IrrigationAdvisor {
    type Request = DecisionInput;
    type Advice = DecisionResult;

    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Irrigation Decision"
    }

    fn advise(&self, request: &DecisionInput) -> DecisionResult {
        self.decide(request)
    }
}

/// Decide whether, how much and how to irrigate one field.
///
/// Never fails: unknown soil, crop or stage fall back to their defaults
/// and out-of-range numbers flow through the arithmetic unchanged.
pub fn decide(
    soil_type: &str,
    crop_name: &str,
    crop_stage: &str,
    current_moisture_pct: f64,
    temperature_c: f64,
    rainfall_probability_pct: f64,
) -> DecisionResult {
    IrrigationAdvisor.decide(&DecisionInput::new(
        soil_type,
        crop_name,
        crop_stage,
        current_moisture_pct,
        temperature_c,
        rainfall_probability_pct,
    ))
}

fn saturated_result(field: &FieldConditions, method: IrrigationMethod) -> DecisionResult {
    DecisionResult {
        need_irrigation: false,
        water_required_mm: 0.0,
        duration_minutes: 0,
        frequency_days: 0,
        irrigation_method: method,
        risks: risks::risk_messages(&risks::SATURATION_RISKS),
        explanation: explanation::explain_saturated(field),
    }
}

/// Run time in whole minutes at the fixed delivery rate.
pub fn duration_minutes(water_mm: f64) -> u32 {
    let minutes = (water_mm / DELIVERY_RATE_MM_PER_HOUR * 60.0).round_ties_even();
    if minutes.is_finite() && minutes > 0.0 {
        minutes as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deterministic_behavior() {
        let a = decide("loam", "wheat", "vegetative", 20.0, 25.0, 10.0);
        let b = decide("loam", "wheat", "vegetative", 20.0, 25.0, 10.0);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn over_saturation_rule() {
        let result = decide("clay", "rice", "vegetative", 85.0, 28.0, 20.0);
        assert!(!result.need_irrigation);
        assert_eq!(result.water_required_mm, 0.0);
        assert_eq!(result.duration_minutes, 0);
        assert!(result.risks.iter().any(|r| r.contains("Over-saturation")));
        assert!(result.explanation.to_lowercase().contains("waterlogging"));
        assert_eq!(result.irrigation_method, IrrigationMethod::Flood);
    }

    #[test]
    fn saturation_guard_short_circuits_for_every_soil() {
        for soil in ["clay", "loam", "sandy", "unknown"] {
            let result = decide(soil, "wheat", "flowering", 99.0, 45.0, 0.0);
            assert!(!result.need_irrigation, "{}", soil);
            assert_eq!(result.water_required_mm, 0.0);
            assert_eq!(result.frequency_days, 0);
            assert_eq!(
                result.risks,
                vec!["Over-saturation risk", "Waterlogging", "Root rot possible"]
            );
            assert!(result.explanation.contains("waterlogging"));
        }
    }

    #[test]
    fn high_rainfall_probability() {
        let result = decide("loam", "wheat", "vegetative", 22.0, 25.0, 75.0);
        // (5.0 + 3 * 0.5) * 0.2 = 1.3
        assert!(result.water_required_mm <= 2.0 || !result.need_irrigation);
        assert!(result.need_irrigation);
        assert_eq!(result.water_required_mm, 1.3);
    }

    #[test]
    fn certain_rain_cancels_irrigation() {
        let result = decide("loam", "wheat", "vegetative", 10.0, 35.0, 85.0);
        assert!(!result.need_irrigation);
        assert_eq!(result.water_required_mm, 0.0);
        assert!(result.explanation.contains("Rain is likely"));
    }

    #[test]
    fn sandy_soil_frequent_irrigation() {
        let sandy = decide("sandy", "wheat", "vegetative", 15.0, 25.0, 10.0);
        let clay = decide("clay", "wheat", "vegetative", 30.0, 25.0, 10.0);
        assert!(sandy.frequency_days < clay.frequency_days);
        assert_eq!(sandy.frequency_days, 2);
        assert_eq!(clay.frequency_days, 5);
    }

    #[test]
    fn sandy_dry_field_needs_water() {
        let result = decide("sandy", "wheat", "vegetative", 9.0, 25.0, 10.0);
        assert!(result.need_irrigation);
        assert_eq!(result.frequency_days, 2);
        assert!(result.risks.join(" ").to_lowercase().contains("wilting"));
    }

    #[test]
    fn sandy_at_optimal_min_is_not_irrigated() {
        // 15% is the bottom of the sandy optimal band, not below it
        let result = decide("sandy", "wheat", "vegetative", 15.0, 25.0, 10.0);
        assert!(!result.need_irrigation);
        assert_eq!(result.frequency_days, 2);
    }

    #[test]
    fn frequency_ordering_for_identical_inputs() {
        let days: Vec<u32> = ["sandy", "loam", "clay"]
            .iter()
            .map(|s| decide(s, "wheat", "vegetative", 20.0, 25.0, 10.0).frequency_days)
            .collect();
        assert_eq!(days, vec![2, 3, 5]);
    }

    #[test]
    fn flowering_stage_priority() {
        let flowering = decide("loam", "wheat", "flowering", 20.0, 25.0, 10.0);
        let vegetative = decide("loam", "wheat", "vegetative", 20.0, 25.0, 10.0);
        assert!(flowering.need_irrigation && vegetative.need_irrigation);
        assert!(flowering.water_required_mm > vegetative.water_required_mm);
        // 6 * 1.15 + 2.5 = 9.4 vs 5 + 2.5 = 7.5
        assert_eq!(flowering.water_required_mm, 9.4);
        assert_eq!(vegetative.water_required_mm, 7.5);
    }

    #[test]
    fn temperature_adjustment() {
        let hot = decide("loam", "wheat", "vegetative", 20.0, 35.0, 10.0);
        let cool = decide("loam", "wheat", "vegetative", 20.0, 18.0, 10.0);
        assert!(hot.water_required_mm > cool.water_required_mm);
    }

    #[test]
    fn critical_wilting_point() {
        let result = decide("loam", "wheat", "vegetative", 15.0, 25.0, 10.0);
        assert!(result.need_irrigation);
        assert!(result.risks.join(" ").to_lowercase().contains("wilting"));
        assert!(result.explanation.contains("wilting"));
    }

    #[test]
    fn irrigation_method_selection() {
        let rice = decide("clay", "rice", "vegetative", 30.0, 28.0, 10.0);
        assert_eq!(rice.irrigation_method, IrrigationMethod::Flood);
        let wheat = decide("loam", "wheat", "vegetative", 20.0, 25.0, 10.0);
        assert_eq!(wheat.irrigation_method, IrrigationMethod::Drip);
        let cane = decide("loam", "sugarcane", "vegetative", 20.0, 25.0, 10.0);
        assert_eq!(cane.irrigation_method, IrrigationMethod::Furrow);
    }

    #[test]
    fn duration_calculation() {
        let result = decide("loam", "wheat", "vegetative", 20.0, 25.0, 10.0);
        assert!(result.need_irrigation);
        // 7.5 mm at 10 mm/h
        assert_eq!(result.duration_minutes, 45);
        assert_eq!(duration_minutes(0.0), 0);
        assert_eq!(duration_minutes(12.3), 74);
    }

    #[test]
    fn no_irrigation_adequate_moisture() {
        let result = decide("loam", "wheat", "vegetative", 28.0, 25.0, 10.0);
        assert!(!result.need_irrigation);
        assert_eq!(result.water_required_mm, 0.0);
        assert_eq!(result.duration_minutes, 0);
        assert_eq!(result.frequency_days, 3);
    }

    #[test]
    fn case_insensitive_inputs() {
        let upper = decide("CLAY", "WHEAT", "FLOWERING", 30.0, 25.0, 10.0);
        let lower = decide("clay", "wheat", "flowering", 30.0, 25.0, 10.0);
        assert_eq!(upper, lower);
        let padded = decide("  Clay ", " Wheat", "Flowering ", 30.0, 25.0, 10.0);
        assert_eq!(padded, lower);
    }

    #[test]
    fn unknown_crop_defaults_to_wheat() {
        let unknown = decide("loam", "unknown_crop_xyz", "vegetative", 20.0, 25.0, 10.0);
        let wheat = decide("loam", "wheat", "vegetative", 20.0, 25.0, 10.0);
        assert_eq!(unknown.water_required_mm, wheat.water_required_mm);
        assert_eq!(unknown.irrigation_method, IrrigationMethod::Drip);
    }

    #[test]
    fn unknown_soil_defaults_to_loam_but_keeps_name() {
        let unknown = decide("volcanic", "wheat", "vegetative", 20.0, 25.0, 10.0);
        let loam = decide("loam", "wheat", "vegetative", 20.0, 25.0, 10.0);
        assert_eq!(unknown.water_required_mm, loam.water_required_mm);
        assert_eq!(unknown.frequency_days, 3);
        assert!(unknown.explanation.contains("volcanic soil"));
    }

    #[test]
    fn unknown_stage_uses_flat_need() {
        // 5.0 + 2.5 for rice with an unrecognised stage
        let result = decide("loam", "rice", "tillering", 20.0, 25.0, 10.0);
        assert_eq!(result.water_required_mm, 7.5);
    }

    #[test]
    fn extreme_temperature_risks() {
        let hot = decide("loam", "wheat", "vegetative", 25.0, 42.0, 10.0);
        assert!(hot.risks.join(" ").to_lowercase().contains("heat"));
        let cold = decide("loam", "wheat", "vegetative", 25.0, 5.0, 10.0);
        assert!(cold.risks.join(" ").to_lowercase().contains("cold"));
    }

    #[test]
    fn nonsensical_inputs_do_not_panic() {
        let cases = [
            (-40.0, -30.0, -5.0),
            (150.0, 60.0, 300.0),
            (f64::NAN, f64::NAN, f64::NAN),
            (f64::NEG_INFINITY, f64::INFINITY, 50.0),
        ];
        for (moisture, temp, rain) in cases {
            let result = decide("", "", "", moisture, temp, rain);
            assert!(result.water_required_mm >= 0.0);
            assert!(!result.risks.is_empty());
        }
    }

    #[test]
    fn water_rounds_from_exact_decimal_value() {
        // 5.0 * 0.76 + 35 * 0.5 = 21.3, halved by rain
        let cool = decide("clay", "rice", "germination", 0.0, 13.0, 50.0);
        assert_eq!(cool.water_required_mm, 10.7);
        assert_eq!(cool.duration_minutes, 64);
        assert!(cool.explanation.contains("Apply about 10.7mm of water."));

        let mild = decide("clay", "rice", "germination", 0.0, 19.0, 50.0);
        assert_eq!(mild.water_required_mm, 10.9);
        assert_eq!(mild.duration_minutes, 65);
    }

    #[test]
    fn infinite_dryness_does_not_irrigate() {
        let result = decide("loam", "wheat", "vegetative", f64::NEG_INFINITY, 25.0, 10.0);
        assert!(!result.need_irrigation);
        assert_eq!(result.water_required_mm, 0.0);
        assert_eq!(result.duration_minutes, 0);
        let json = serde_json::to_string(&result).unwrap();
        let parsed: DecisionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn advisor_trait_matches_free_function() {
        let input = DecisionInput::new("sandy", "maize", "flowering", 8.0, 34.0, 25.0);
        assert_eq!(
            IrrigationAdvisor.advise(&input),
            decide("sandy", "maize", "flowering", 8.0, 34.0, 25.0)
        );
        assert_eq!(IrrigationAdvisor.id(), "irrigation");
    }

    proptest! {
        #[test]
        fn water_is_never_negative_and_tracks_need(
            moisture in -20.0f64..120.0,
            temp in -20.0f64..55.0,
            rain in -10.0f64..110.0,
        ) {
            let result = decide("loam", "maize", "vegetative", moisture, temp, rain);
            prop_assert!(result.water_required_mm >= 0.0);
            prop_assert!(!result.risks.is_empty());
            if result.need_irrigation {
                prop_assert!(result.water_required_mm >= MIN_APPLICATION_MM);
            } else {
                prop_assert_eq!(result.water_required_mm, 0.0);
                prop_assert_eq!(result.duration_minutes, 0);
            }
        }

        #[test]
        fn saturated_soil_never_irrigates(
            excess in 0.001f64..50.0,
            temp in -20.0f64..55.0,
            rain in 0.0f64..100.0,
        ) {
            for (soil, profile) in [("clay", tables::CLAY), ("loam", tables::LOAM), ("sandy", tables::SANDY)] {
                let result = decide(soil, "rice", "flowering", profile.saturation + excess, temp, rain);
                prop_assert!(!result.need_irrigation);
                prop_assert_eq!(result.water_required_mm, 0.0);
                prop_assert!(result.explanation.contains("waterlogging"));
            }
        }

        #[test]
        fn flowering_never_gets_less_water(
            moisture in 0.0f64..40.0,
            temp in 0.0f64..45.0,
            rain in 0.0f64..100.0,
        ) {
            let flowering = decide("clay", "cotton", "flowering", moisture, temp, rain);
            let vegetative = decide("clay", "cotton", "vegetative", moisture, temp, rain);
            prop_assert!(flowering.water_required_mm >= vegetative.water_required_mm);
        }
    }
}
