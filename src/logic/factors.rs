use crate::models::CropStage;

/// Baseline temperature for the evapotranspiration adjustment (°C)
pub const BASELINE_TEMP_C: f64 = 25.0;

/// Fractional change in water need per degree away from baseline
pub const TEMP_SENSITIVITY_PER_C: f64 = 0.02;

pub const MIN_TEMP_FACTOR: f64 = 0.7;
pub const MAX_TEMP_FACTOR: f64 = 1.3;

pub const FLOWERING_BONUS: f64 = 1.15;

/// Share of the computed water need still applied given a rain probability.
///
/// Bands are inclusive on their lower bound:
/// - >= 80%: 0.0
/// - 65-80%: 0.2
/// - 40-65%: 0.5
/// - 20-40%: 0.8
/// - below 20%: 1.0
pub fn rainfall_factor(probability_pct: f64) -> f64 {
    if probability_pct >= 80.0 {
        0.0
    } else if probability_pct >= 65.0 {
        0.2
    } else if probability_pct >= 40.0 {
        0.5
    } else if probability_pct >= 20.0 {
        0.8
    } else {
        1.0
    }
}

/// Linear ±2% per degree around 25°C, clamped to [0.7, 1.3].
pub fn temperature_factor(temperature_c: f64) -> f64 {
    let factor = 1.0 + (temperature_c - BASELINE_TEMP_C) * TEMP_SENSITIVITY_PER_C;
    factor.clamp(MIN_TEMP_FACTOR, MAX_TEMP_FACTOR)
}

pub fn stage_factor(stage: Option<CropStage>) -> f64 {
    match stage {
        Some(CropStage::Flowering) => FLOWERING_BONUS,
        _ => 1.0,
    }
}
