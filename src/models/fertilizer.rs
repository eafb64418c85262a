use serde::{Deserialize, Serialize};

/// Nitrogen / phosphorus / potassium quantities in kg per acre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npk {
    #[serde(rename = "N")]
    pub n: u32,
    #[serde(rename = "P")]
    pub p: u32,
    #[serde(rename = "K")]
    pub k: u32,
}

impl Npk {
    pub const fn new(n: u32, p: u32, k: u32) -> Self {
        Self { n, p, k }
    }

    /// Element-wise scale, rounding each nutrient to whole kilograms.
    pub fn scaled(&self, factors: NutrientFactors) -> Self {
        Self {
            n: round_kg(self.n as f64 * factors.n),
            p: round_kg(self.p as f64 * factors.p),
            k: round_kg(self.k as f64 * factors.k),
        }
    }
}

impl std::fmt::Display for Npk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.n, self.p, self.k)
    }
}

fn round_kg(value: f64) -> u32 {
    value.round_ties_even().max(0.0) as u32
}

/// Per-nutrient multipliers or shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientFactors {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl NutrientFactors {
    pub const fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k }
    }

    pub const UNIFORM: NutrientFactors = NutrientFactors::new(1.0, 1.0, 1.0);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerAdvice {
    pub total_npk: Npk,
    pub stage_npk: Npk,
    pub timing: Vec<String>,
    pub organic_alternatives: Vec<String>,
    pub explanation: String,
}
