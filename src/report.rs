//! Plain-text rendering of advisor output for the terminal.

use farmadvisor::logic::{tables, Advisor, FertilizerAdvisor, IrrigationAdvisor, YieldAdvisor};
use farmadvisor::models::{
    AlertLevel, Crop, DecisionResult, FertilizerAdvice, SoilType, WateringDay, YieldEstimate,
};

const RULE: &str = "────────────────────────────────────────";

fn heading(title: &str) -> Vec<String> {
    vec![title.to_string(), RULE.to_string()]
}

pub fn irrigation(result: &DecisionResult) -> String {
    let level = AlertLevel::from_risks(&result.risks);
    let mut lines = heading(IrrigationAdvisor.name());

    lines.push(format!(
        "Irrigate:   {}",
        if result.need_irrigation { "YES" } else { "NO" }
    ));
    if result.need_irrigation {
        lines.push(format!("Water:      {} mm", result.water_required_mm));
        lines.push(format!("Duration:   {} min", result.duration_minutes));
    }
    lines.push(format!("Method:     {}", result.irrigation_method));
    if result.frequency_days > 0 {
        lines.push(format!("Frequency:  every {} days", result.frequency_days));
    }
    lines.push(String::new());

    lines.push(format!("Status: {} {}", level.symbol(), level));
    for risk in &result.risks {
        lines.push(format!("  - {}", risk));
    }
    lines.push(String::new());
    lines.push(result.explanation.clone());

    lines.join("\n")
}

pub fn plan(result: &DecisionResult, days: &[WateringDay]) -> String {
    let mut lines = vec![irrigation(result), String::new()];
    lines.extend(heading("7-Day Watering Plan"));

    for day in days {
        let action = if day.water {
            format!("water {} mm", result.water_required_mm)
        } else {
            "skip".to_string()
        };
        lines.push(format!("{} {}  {}", day.weekday(), day.date, action));
    }

    lines.join("\n")
}

pub fn fertilizer(advice: &FertilizerAdvice) -> String {
    let mut lines = heading(FertilizerAdvisor.name());

    lines.push(format!("Seasonal total (N-P-K): {} kg/acre", advice.total_npk));
    lines.push(format!("This stage (N-P-K):     {} kg/acre", advice.stage_npk));
    lines.push(String::new());

    lines.push("Application timing:".to_string());
    for step in &advice.timing {
        lines.push(format!("  - {}", step));
    }

    if !advice.organic_alternatives.is_empty() {
        lines.push(String::new());
        lines.push("Organic alternatives:".to_string());
        for alt in &advice.organic_alternatives {
            lines.push(format!("  {}", alt));
        }
    }

    lines.push(String::new());
    lines.push(advice.explanation.clone());

    lines.join("\n")
}

pub fn yield_estimate(estimate: &YieldEstimate) -> String {
    let mut lines = heading(YieldAdvisor.name());

    lines.push(format!(
        "Expected yield:   {} quintals/acre ({} - {})",
        estimate.expected_yield, estimate.yield_min, estimate.yield_max
    ));
    lines.push(format!(
        "Water:            {} ({}% of need)",
        estimate.water_status, estimate.water_fulfillment
    ));
    lines.push(format!("Cost:             ₹{}", estimate.cost));
    lines.push(format!("Revenue:          ₹{}", estimate.revenue));
    lines.push(format!("Profit:           ₹{}", estimate.profit));
    lines.push(format!("ROI:              {}%", estimate.roi));
    if estimate.water_status.is_deficit() {
        lines.push(format!(
            "{} Yield is limited by water supply",
            AlertLevel::Warning.symbol()
        ));
    }
    lines.push(String::new());
    lines.push(estimate.explanation.clone());

    lines.join("\n")
}

pub fn reference_tables() -> String {
    let mut lines = heading("Soil moisture thresholds (%)");
    lines.push(format!(
        "{:<8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>6}",
        "Soil", "Capacity", "Wilting", "OptMin", "OptMax", "Saturat", "Every"
    ));
    for soil in [SoilType::Clay, SoilType::Loam, SoilType::Sandy] {
        let p = tables::soil_profile(Some(soil));
        lines.push(format!(
            "{:<8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>5}d",
            soil.as_str(),
            p.field_capacity,
            p.wilting_point,
            p.optimal_min,
            p.optimal_max,
            p.saturation,
            tables::irrigation_frequency_days(Some(soil))
        ));
    }
    lines.push(String::new());

    lines.extend(heading("Daily crop water need (mm/day)"));
    lines.push(format!(
        "{:<10} {:>6} {:>6} {:>6} {:>6}  {}",
        "Crop", "Germ", "Veg", "Flower", "Harv", "Method"
    ));
    for crop in Crop::ALL {
        let w = tables::crop_water_profile(Some(crop));
        lines.push(format!(
            "{:<10} {:>6} {:>6} {:>6} {:>6}  {}",
            crop.as_str(),
            w.germination,
            w.vegetative,
            w.flowering,
            w.harvest,
            tables::irrigation_method(Some(crop))
        ));
    }

    lines.join("\n")
}
