use super::irrigation::FieldConditions;
use crate::models::Risk;

pub const EXTREME_HEAT_C: f64 = 38.0;
pub const COLD_STRESS_C: f64 = 10.0;
pub const RAIN_SKIP_PROBABILITY_PCT: f64 = 70.0;

/// Fixed risk set reported when the soil is above saturation.
pub const SATURATION_RISKS: [Risk; 3] = [Risk::OverSaturation, Risk::Waterlogging, Risk::RootRot];

/// Risk flags for a field, in a fixed order. Never empty: when nothing
/// applies the list holds the single `Risk::None` sentinel.
pub fn identify_risks(field: &FieldConditions) -> Vec<Risk> {
    let profile = &field.profile;
    let moisture = field.moisture_pct;
    let mut risks = Vec::new();

    if moisture < profile.wilting_point {
        risks.push(Risk::CriticalWaterStress);
    } else if moisture < profile.optimal_min {
        risks.push(Risk::BelowOptimalMoisture);
    }

    if moisture > profile.optimal_max {
        risks.push(Risk::FungalDisease);
    }

    if field.temperature_c > EXTREME_HEAT_C {
        risks.push(Risk::ExtremeHeat);
    } else if field.temperature_c < COLD_STRESS_C {
        risks.push(Risk::ColdStress);
    }

    if field.rainfall_probability_pct > RAIN_SKIP_PROBABILITY_PCT && moisture > profile.optimal_min
    {
        risks.push(Risk::RainWithAdequateMoisture);
    }

    if field.is_flowering() && moisture < profile.optimal_min {
        risks.push(Risk::FloweringWaterDemand);
    }

    if risks.is_empty() {
        risks.push(Risk::None);
    }

    risks
}

pub fn risk_messages(risks: &[Risk]) -> Vec<String> {
    risks.iter().map(|r| r.as_str().to_string()).collect()
}
