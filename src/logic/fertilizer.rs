use super::Advisor;
use crate::models::{Crop, CropStage, FertilizerAdvice, Npk, NutrientFactors, SoilType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Seasonal NPK requirement when the crop is unknown (kg/acre)
pub const DEFAULT_BASE_NPK: Npk = Npk::new(80, 40, 40);

/// Stage share applied when the stage is unknown
pub const DEFAULT_STAGE_SHARE: NutrientFactors = NutrientFactors::new(0.25, 0.25, 0.25);

const CALCULATION_NOTE: &str = "Calculation method: This recommendation is based on established \
     agricultural science and soil chemistry principles, not AI guessing. The values are \
     calculated using crop-specific requirements, soil characteristics, and growth stage needs.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerRequest {
    pub crop_name: String,
    pub soil_type: String,
    pub growth_stage: String,
}

pub fn base_npk(crop: Option<Crop>) -> Npk {
    match crop {
        Some(Crop::Rice) => Npk::new(120, 60, 40),
        Some(Crop::Wheat) => Npk::new(100, 50, 30),
        Some(Crop::Cotton) => Npk::new(80, 40, 40),
        Some(Crop::Sugarcane) => Npk::new(200, 80, 80),
        Some(Crop::Maize) => Npk::new(90, 45, 35),
        Some(Crop::Soybean) => Npk::new(30, 60, 40),
        Some(Crop::Potato) => Npk::new(100, 80, 100),
        Some(Crop::Tomato) => Npk::new(100, 50, 50),
        Some(Crop::Onion) => Npk::new(80, 40, 40),
        Some(Crop::Groundnut) => Npk::new(25, 50, 75),
        None => DEFAULT_BASE_NPK,
    }
}

/// Soil multipliers reflecting nutrient retention and fixation.
pub fn soil_adjustment(soil: Option<SoilType>) -> NutrientFactors {
    match soil {
        Some(SoilType::Clay) => NutrientFactors::new(0.9, 1.1, 1.0),
        Some(SoilType::Sandy) => NutrientFactors::new(1.2, 0.9, 1.2),
        Some(SoilType::Loam) => NutrientFactors::UNIFORM,
        Some(SoilType::Silty) => NutrientFactors::new(0.95, 1.05, 1.0),
        Some(SoilType::Peaty) => NutrientFactors::new(0.8, 1.2, 1.1),
        Some(SoilType::Chalky) => NutrientFactors::new(1.1, 1.3, 1.0),
        None => NutrientFactors::UNIFORM,
    }
}

/// Share of the seasonal total applied during each stage.
pub fn stage_share(stage: Option<CropStage>) -> NutrientFactors {
    match stage {
        Some(CropStage::Germination) => NutrientFactors::new(0.20, 0.40, 0.20),
        Some(CropStage::Vegetative) => NutrientFactors::new(0.40, 0.30, 0.30),
        Some(CropStage::Flowering) => NutrientFactors::new(0.25, 0.20, 0.30),
        Some(CropStage::Fruiting) => NutrientFactors::new(0.10, 0.10, 0.15),
        Some(CropStage::Harvest) => NutrientFactors::new(0.05, 0.00, 0.05),
        None => DEFAULT_STAGE_SHARE,
    }
}

pub fn application_timing(stage: Option<CropStage>) -> Vec<String> {
    let lines: &[&str] = match stage {
        Some(CropStage::Germination) => &[
            "Apply at sowing/transplanting",
            "Apply 50% of recommended dose as basal",
            "Apply remaining 50% after 2 weeks",
        ],
        Some(CropStage::Vegetative) => &[
            "Apply in 2 equal splits",
            "First dose immediately",
            "Second dose after 15-20 days",
        ],
        Some(CropStage::Flowering) => &[
            "Apply in single dose at flower initiation",
            "Focus on potassium for flower/fruit development",
            "Reduce nitrogen to prevent excessive vegetative growth",
        ],
        Some(CropStage::Fruiting) => &[
            "Apply light dose to support fruit development",
            "Focus on potassium (K)",
            "Minimal nitrogen to avoid delaying maturity",
        ],
        Some(CropStage::Harvest) => &[
            "Minimal to no fertilizer needed",
            "Stop nitrogen application completely",
            "Allow crop to mature naturally",
        ],
        None => &["Apply as recommended by local agricultural expert"],
    };
    lines.iter().map(|l| l.to_string()).collect()
}

/// Organic substitutes for a stage dose, skipping nutrients with a zero dose.
pub fn organic_alternatives(dose: Npk) -> Vec<String> {
    let mut alternatives = Vec::new();

    if dose.n > 0 {
        alternatives.push(format!(
            "For Nitrogen: {} kg/acre of well-decomposed compost or farmyard manure",
            dose.n * 15
        ));
        alternatives.push(format!("   OR {} kg/acre of neem cake", dose.n * 5));
    }

    if dose.p > 0 {
        alternatives.push(format!(
            "For Phosphorus: {} kg/acre of bone meal",
            dose.p * 6
        ));
        alternatives.push(format!("   OR {} kg/acre of rock phosphate", dose.p * 4));
    }

    if dose.k > 0 {
        alternatives.push(format!("For Potassium: {} kg/acre of wood ash", dose.k * 15));
        alternatives.push("   OR Apply kelp meal or greensand as per availability".to_string());
    }

    alternatives
}

/// NPK recommendation for a crop, soil and growth stage.
///
/// All three inputs are free text; unknown values fall back to the
/// generic crop requirement, neutral soil and an even stage split.
pub fn recommend_npk(crop_name: &str, soil_type: &str, growth_stage: &str) -> FertilizerAdvice {
    let crop = Crop::from_str(crop_name);
    let soil = SoilType::from_str(soil_type);
    let stage = CropStage::from_label(growth_stage);

    let soil_adj = soil_adjustment(soil);
    let total_npk = base_npk(crop).scaled(soil_adj);
    let stage_npk = total_npk.scaled(stage_share(stage));

    debug!(?crop, ?soil, ?stage, %total_npk, %stage_npk, "Fertilizer recommendation computed");

    let crop_label = crop.map_or_else(|| crop_name.trim().to_string(), |c| c.to_string());
    let soil_label = soil.map_or_else(|| soil_type.trim().to_string(), |s| s.to_string());
    let stage_label = stage.map_or_else(|| growth_stage.trim().to_string(), |s| s.label().to_string());

    FertilizerAdvice {
        total_npk,
        stage_npk,
        timing: application_timing(stage),
        organic_alternatives: organic_alternatives(stage_npk),
        explanation: explain(&crop_label, &soil_label, &stage_label, total_npk, stage_npk, soil_adj),
    }
}

fn explain(
    crop: &str,
    soil: &str,
    stage: &str,
    total: Npk,
    dose: Npk,
    soil_adj: NutrientFactors,
) -> String {
    let mut parts = vec![format!(
        "Crop requirement: {} has specific nutrient needs throughout its growth cycle. \
         The total seasonal requirement is approximately {} (N-P-K) kg/acre.",
        crop, total
    )];

    let mut soil_impact = Vec::new();
    if soil_adj.n > 1.0 {
        soil_impact.push(format!("nitrogen increased due to {} soil's low retention", soil));
    } else if soil_adj.n < 1.0 {
        soil_impact.push(format!("nitrogen reduced as {} soil retains it well", soil));
    }
    if soil_adj.p > 1.0 {
        soil_impact.push(format!("phosphorus increased as {} soil tends to fix P", soil));
    } else if soil_adj.p < 1.0 {
        soil_impact.push(format!(
            "phosphorus reduced due to better availability in {} soil",
            soil
        ));
    }
    if !soil_impact.is_empty() {
        parts.push(format!(
            "Soil adjustment: The recommendation is adjusted because {}.",
            soil_impact.join(", and ")
        ));
    }

    parts.push(format!(
        "Growth stage: Currently in {} stage. At this stage, the crop needs {} (N-P-K) kg/acre.",
        stage, dose
    ));

    let mut roles = Vec::new();
    if dose.n > 0 {
        roles.push("Nitrogen (N) promotes leaf and stem growth");
    }
    if dose.p > 0 {
        roles.push("Phosphorus (P) supports root development and energy transfer");
    }
    if dose.k > 0 {
        roles.push("Potassium (K) enhances disease resistance and fruit quality");
    }
    if !roles.is_empty() {
        parts.push(format!("Why these nutrients: {}.", roles.join(", ")));
    }

    parts.push(CALCULATION_NOTE.to_string());

    parts.join("\n\n")
}

pub struct FertilizerAdvisor;

impl Advisor for FertilizerAdvisor {
    type Request = FertilizerRequest;
    type Advice = FertilizerAdvice;

    fn id(&self) -> &'static str {
        "fertilizer"
    }

    fn name(&self) -> &'static str {
        "Fertilizer Recommendation"
    }

    fn advise(&self, request: &FertilizerRequest) -> FertilizerAdvice {
        recommend_npk(&request.crop_name, &request.soil_type, &request.growth_stage)
    }
}
