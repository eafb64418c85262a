use super::{round_tenth, Advisor};
use crate::models::{Crop, IrrigationLevel, WaterStatus, YieldEstimate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fulfillment ratio cap; water beyond 120% of need adds nothing
pub const MAX_FULFILLMENT: f64 = 1.2;

/// Spread applied around the expected yield for the reported range
pub const YIELD_SPREAD: f64 = 0.15;

const CALCULATION_NOTE: &str = "Calculation method: This estimate is based on established \
     crop-water relationships and agricultural research data. The yield multiplier is calculated \
     deterministically based on the water stress index. This is not an AI prediction but a \
     mathematical relationship between water availability and crop productivity.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldRequest {
    pub crop_name: String,
    pub rainfall_mm: f64,
    pub irrigation_level: String,
}

/// Static per-crop economics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropEconomics {
    /// Potential yield under ideal water supply (quintals/acre)
    pub base_yield: f64,
    /// Seasonal water requirement (mm)
    pub water_need_mm: f64,
    /// Seeds, labour and basic inputs (INR/acre)
    pub base_cost: i64,
    /// Market price (INR/quintal)
    pub price: i64,
}

impl CropEconomics {
    const fn new(base_yield: f64, water_need_mm: f64, base_cost: i64, price: i64) -> Self {
        Self {
            base_yield,
            water_need_mm,
            base_cost,
            price,
        }
    }
}

pub fn crop_economics(crop: Option<Crop>) -> CropEconomics {
    match crop {
        Some(Crop::Rice) => CropEconomics::new(25.0, 1200.0, 15000, 2000),
        Some(Crop::Wheat) => CropEconomics::new(20.0, 450.0, 12000, 2100),
        Some(Crop::Cotton) => CropEconomics::new(8.0, 700.0, 18000, 6000),
        Some(Crop::Sugarcane) => CropEconomics::new(300.0, 2000.0, 35000, 300),
        Some(Crop::Maize) => CropEconomics::new(22.0, 600.0, 13000, 1800),
        Some(Crop::Soybean) => CropEconomics::new(12.0, 500.0, 11000, 4000),
        Some(Crop::Potato) => CropEconomics::new(80.0, 500.0, 25000, 800),
        Some(Crop::Tomato) => CropEconomics::new(120.0, 600.0, 30000, 1200),
        Some(Crop::Onion) => CropEconomics::new(100.0, 450.0, 22000, 1500),
        Some(Crop::Groundnut) => CropEconomics::new(10.0, 550.0, 14000, 5500),
        None => CropEconomics::new(15.0, 600.0, 15000, 2000),
    }
}

/// Fraction of the seasonal need supplied by irrigation.
pub fn irrigation_share(level: IrrigationLevel) -> f64 {
    match level {
        IrrigationLevel::Low => 0.30,
        IrrigationLevel::Medium => 0.50,
        IrrigationLevel::High => 0.70,
    }
}

pub fn irrigation_cost(level: IrrigationLevel) -> i64 {
    match level {
        IrrigationLevel::Low => 2000,
        IrrigationLevel::Medium => 5000,
        IrrigationLevel::High => 8000,
    }
}

/// Water status and yield multiplier for a fulfillment ratio.
pub fn water_response(fulfillment: f64) -> (WaterStatus, f64) {
    if fulfillment < 0.5 {
        (WaterStatus::SevereDeficit, 0.3)
    } else if fulfillment < 0.7 {
        (WaterStatus::ModerateDeficit, 0.5)
    } else if fulfillment < 0.85 {
        (WaterStatus::MildDeficit, 0.75)
    } else if fulfillment <= 1.1 {
        (WaterStatus::Optimal, 1.0)
    } else {
        (WaterStatus::Excess, 0.85)
    }
}

/// Estimate seasonal yield from rainfall and the irrigation regime.
///
/// Unknown crops use generic economics; an unknown irrigation level is
/// treated as medium.
pub fn estimate_yield(crop_name: &str, rainfall_mm: f64, irrigation_level: &str) -> YieldEstimate {
    let crop = Crop::from_str(crop_name);
    let level = IrrigationLevel::from_str(irrigation_level).unwrap_or_default();
    let econ = crop_economics(crop);

    let total_water = rainfall_mm + econ.water_need_mm * irrigation_share(level);
    let fulfillment = (total_water / econ.water_need_mm).min(MAX_FULFILLMENT);
    let (water_status, multiplier) = water_response(fulfillment);

    let expected = econ.base_yield * multiplier;
    let cost = econ.base_cost + irrigation_cost(level);
    let revenue = (expected * econ.price as f64).round_ties_even() as i64;
    let profit = revenue - cost;
    let roi = if cost > 0 {
        round_tenth(profit as f64 / cost as f64 * 100.0)
    } else {
        0.0
    };

    debug!(
        ?crop,
        ?level,
        total_water,
        fulfillment,
        %water_status,
        expected,
        "Yield estimate computed"
    );

    let crop_label = crop.map_or_else(|| crop_name.trim().to_string(), |c| c.to_string());

    YieldEstimate {
        yield_min: round_tenth(expected * (1.0 - YIELD_SPREAD)),
        yield_max: round_tenth(expected * (1.0 + YIELD_SPREAD)),
        expected_yield: round_tenth(expected),
        water_status,
        water_fulfillment: round_tenth(fulfillment * 100.0),
        cost,
        revenue,
        profit,
        roi,
        explanation: explain(
            &crop_label,
            rainfall_mm,
            level,
            &econ,
            total_water,
            fulfillment,
            water_status,
            multiplier,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn explain(
    crop: &str,
    rainfall_mm: f64,
    level: IrrigationLevel,
    econ: &CropEconomics,
    total_water: f64,
    fulfillment: f64,
    status: WaterStatus,
    multiplier: f64,
) -> String {
    let mut parts = vec![
        format!(
            "Water requirement: {} needs approximately {}mm of water throughout the \
             growing season for optimal yield.",
            crop, econ.water_need_mm
        ),
        format!(
            "Water sources: Expected rainfall of {}mm plus {} contributes a total of \
             approximately {}mm of water.",
            rainfall_mm,
            level.label(),
            total_water.round_ties_even()
        ),
        format!(
            "Water fulfillment: The crop will receive {}% of its water requirement. Status: {}.",
            round_tenth(fulfillment * 100.0),
            status
        ),
    ];

    let pct = (multiplier * 100.0).round_ties_even();
    let impact = if multiplier >= 1.0 {
        format!(
            "Yield impact: Water availability is optimal. Expected to achieve {}% of the \
             maximum potential yield ({} quintals/acre).",
            pct, econ.base_yield
        )
    } else if multiplier >= 0.75 {
        format!(
            "Yield impact: Mild water stress will reduce yield to approximately {}% of \
             maximum potential ({} quintals/acre). Consider increasing irrigation if possible.",
            pct, econ.base_yield
        )
    } else {
        format!(
            "Yield impact: Significant water stress will reduce yield to approximately {}% of \
             maximum potential ({} quintals/acre). Improved irrigation is strongly recommended.",
            pct, econ.base_yield
        )
    };
    parts.push(impact);
    parts.push(CALCULATION_NOTE.to_string());

    parts.join("\n\n")
}

pub struct YieldAdvisor;

impl Advisor for YieldAdvisor {
    type Request = YieldRequest;
    type Advice = YieldEstimate;

    fn id(&self) -> &'static str {
        "yield"
    }

    fn name(&self) -> &'static str {
        "Yield Estimate"
    }

    fn advise(&self, request: &YieldRequest) -> YieldEstimate {
        estimate_yield(&request.crop_name, request.rainfall_mm, &request.irrigation_level)
    }
}
