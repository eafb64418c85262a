use serde::{Deserialize, Serialize};

/// Qualitative conditions the irrigation engine can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Risk {
    CriticalWaterStress,
    BelowOptimalMoisture,
    FungalDisease,
    ExtremeHeat,
    ColdStress,
    RainWithAdequateMoisture,
    FloweringWaterDemand,
    OverSaturation,
    Waterlogging,
    RootRot,
    None,
}

impl Risk {
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::CriticalWaterStress => "Critical water stress - crop wilting risk",
            Risk::BelowOptimalMoisture => "Below optimal moisture - yield reduction possible",
            Risk::FungalDisease => "High moisture - fungal disease risk",
            Risk::ExtremeHeat => "Extreme heat - increased evaporation",
            Risk::ColdStress => "Cold stress - reduced water uptake",
            Risk::RainWithAdequateMoisture => {
                "Rain expected with adequate moisture - skip irrigation"
            }
            Risk::FloweringWaterDemand => "Critical flowering stage needs adequate water",
            Risk::OverSaturation => "Over-saturation risk",
            Risk::Waterlogging => "Waterlogging",
            Risk::RootRot => "Root rot possible",
            Risk::None => "No significant risks detected",
        }
    }
}

impl std::fmt::Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall alert level for a set of risk messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Good,
    Warning,
    Critical,
}

impl AlertLevel {
    const CRITICAL_KEYWORDS: [&'static str; 3] = ["critical", "wilting", "extreme"];
    const WARNING_KEYWORDS: [&'static str; 3] = ["warning", "high", "below"];

    /// Classify by keyword over the whole risk list, most severe first.
    pub fn from_risks<S: AsRef<str>>(risks: &[S]) -> Self {
        let text = risks
            .iter()
            .map(|r| r.as_ref().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        if Self::CRITICAL_KEYWORDS.iter().any(|k| text.contains(k)) {
            AlertLevel::Critical
        } else if Self::WARNING_KEYWORDS.iter().any(|k| text.contains(k)) {
            AlertLevel::Warning
        } else {
            AlertLevel::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Good => "Good",
            AlertLevel::Warning => "Warning",
            AlertLevel::Critical => "Critical",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AlertLevel::Good => "✓",
            AlertLevel::Warning => "⚠",
            AlertLevel::Critical => "!",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
