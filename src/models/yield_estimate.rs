use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl IrrigationLevel {
    pub const ALL: [IrrigationLevel; 3] = [
        IrrigationLevel::Low,
        IrrigationLevel::Medium,
        IrrigationLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationLevel::Low => "Low",
            IrrigationLevel::Medium => "Medium",
            IrrigationLevel::High => "High",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IrrigationLevel::Low => "Low (minimal irrigation)",
            IrrigationLevel::Medium => "Medium (regular irrigation)",
            IrrigationLevel::High => "High (intensive irrigation)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "minimal" | "low (minimal irrigation)" => Some(IrrigationLevel::Low),
            "medium" | "regular" | "medium (regular irrigation)" => Some(IrrigationLevel::Medium),
            "high" | "intensive" | "high (intensive irrigation)" => Some(IrrigationLevel::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for IrrigationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How well seasonal water supply covers the crop's need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterStatus {
    #[serde(rename = "Severe water deficit")]
    SevereDeficit,
    #[serde(rename = "Moderate water deficit")]
    ModerateDeficit,
    #[serde(rename = "Mild water deficit")]
    MildDeficit,
    #[serde(rename = "Optimal water availability")]
    Optimal,
    #[serde(rename = "Excess water (potential waterlogging)")]
    Excess,
}

impl WaterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterStatus::SevereDeficit => "Severe water deficit",
            WaterStatus::ModerateDeficit => "Moderate water deficit",
            WaterStatus::MildDeficit => "Mild water deficit",
            WaterStatus::Optimal => "Optimal water availability",
            WaterStatus::Excess => "Excess water (potential waterlogging)",
        }
    }

    pub fn is_deficit(&self) -> bool {
        matches!(
            self,
            WaterStatus::SevereDeficit | WaterStatus::ModerateDeficit | WaterStatus::MildDeficit
        )
    }
}

impl std::fmt::Display for WaterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Seasonal yield range and simple cost-benefit figures, per acre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    pub yield_min: f64,
    pub yield_max: f64,
    pub expected_yield: f64,
    pub water_status: WaterStatus,
    /// Percent of the seasonal need covered, capped at 120.
    pub water_fulfillment: f64,
    pub cost: i64,
    pub revenue: i64,
    pub profit: i64,
    pub roi: f64,
    pub explanation: String,
}
