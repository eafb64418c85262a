use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    Silty,
    Peaty,
    Chalky,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Loam,
        SoilType::Sandy,
        SoilType::Silty,
        SoilType::Peaty,
        SoilType::Chalky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Loam => "Loam",
            SoilType::Sandy => "Sandy",
            SoilType::Silty => "Silty",
            SoilType::Peaty => "Peaty",
            SoilType::Chalky => "Chalky",
        }
    }

    /// Case-insensitive, whitespace-tolerant lookup. Returns `None` for
    /// anything unrecognised so callers can apply their own default.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clay" => Some(SoilType::Clay),
            "loam" | "loamy" => Some(SoilType::Loam),
            "sandy" => Some(SoilType::Sandy),
            "silty" => Some(SoilType::Silty),
            "peaty" => Some(SoilType::Peaty),
            "chalky" => Some(SoilType::Chalky),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Moisture thresholds for a soil, all in volumetric percent.
///
/// Expected ordering is `wilting_point < optimal_min < optimal_max < saturation`.
/// Nothing enforces it; the reference tables are authored to respect it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    pub field_capacity: f64,
    pub wilting_point: f64,
    pub optimal_min: f64,
    pub optimal_max: f64,
    pub saturation: f64,
}

impl SoilProfile {
    pub fn is_saturated(&self, moisture: f64) -> bool {
        moisture > self.saturation
    }

    pub fn is_below_optimal(&self, moisture: f64) -> bool {
        moisture < self.optimal_min
    }

    /// Shortfall to the bottom of the optimal band, never negative.
    pub fn moisture_deficit(&self, moisture: f64) -> f64 {
        (self.optimal_min - moisture).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_type_from_str_valid() {
        assert_eq!(SoilType::from_str("clay"), Some(SoilType::Clay));
        assert_eq!(SoilType::from_str("CLAY"), Some(SoilType::Clay));
        assert_eq!(SoilType::from_str("  Sandy "), Some(SoilType::Sandy));
        assert_eq!(SoilType::from_str("Loamy"), Some(SoilType::Loam));
        assert_eq!(SoilType::from_str("loam"), Some(SoilType::Loam));
        assert_eq!(SoilType::from_str("Chalky"), Some(SoilType::Chalky));
    }

    #[test]
    fn soil_type_from_str_invalid() {
        assert_eq!(SoilType::from_str("dirt"), None);
        assert_eq!(SoilType::from_str(""), None);
        assert_eq!(SoilType::from_str("silt loam"), None);
    }

    #[test]
    fn soil_type_round_trip() {
        for soil in SoilType::ALL {
            assert_eq!(SoilType::from_str(soil.as_str()), Some(soil));
        }
    }

    #[test]
    fn moisture_deficit_never_negative() {
        let profile = SoilProfile {
            field_capacity: 35.0,
            wilting_point: 18.0,
            optimal_min: 25.0,
            optimal_max: 32.0,
            saturation: 75.0,
        };
        assert_eq!(profile.moisture_deficit(20.0), 5.0);
        assert_eq!(profile.moisture_deficit(25.0), 0.0);
        assert_eq!(profile.moisture_deficit(90.0), 0.0);
    }
}
