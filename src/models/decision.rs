use super::IrrigationMethod;
use serde::{Deserialize, Serialize};

/// One irrigation request. Category fields are free text; numbers are
/// taken as given, with no range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionInput {
    pub soil_type: String,
    pub crop_name: String,
    pub crop_stage: String,
    pub current_moisture_pct: f64,
    pub temperature_c: f64,
    pub rainfall_probability_pct: f64,
}

impl DecisionInput {
    pub fn new(
        soil_type: impl Into<String>,
        crop_name: impl Into<String>,
        crop_stage: impl Into<String>,
        current_moisture_pct: f64,
        temperature_c: f64,
        rainfall_probability_pct: f64,
    ) -> Self {
        Self {
            soil_type: soil_type.into(),
            crop_name: crop_name.into(),
            crop_stage: crop_stage.into(),
            current_moisture_pct,
            temperature_c,
            rainfall_probability_pct,
        }
    }
}

/// Outcome of an irrigation decision, serialized as a flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub need_irrigation: bool,
    pub water_required_mm: f64,
    #[serde(rename = "recommended_duration_minutes")]
    pub duration_minutes: u32,
    pub frequency_days: u32,
    pub irrigation_method: IrrigationMethod,
    pub risks: Vec<String>,
    pub explanation: String,
}
