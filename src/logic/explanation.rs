//! Plain-language narrative for an irrigation decision.

use super::irrigation::FieldConditions;

/// Above this rain probability a skipped irrigation is blamed on the rain
pub const RAIN_DELAY_PROBABILITY_PCT: f64 = 65.0;

/// Above this temperature the farmer is told to water off-peak
pub const HOT_DAY_C: f64 = 32.0;

/// Above this rain probability the reduction is mentioned
pub const RAIN_REDUCTION_PROBABILITY_PCT: f64 = 20.0;

pub fn explain_saturated(field: &FieldConditions) -> String {
    format!(
        "Soil moisture is {}% which is too high. Do not irrigate. \
         Allow soil to dry naturally to avoid waterlogging.",
        field.moisture_pct
    )
}

pub fn explain(field: &FieldConditions, need_irrigation: bool, water_mm: f64) -> String {
    if need_irrigation {
        explain_irrigation(field, water_mm)
    } else {
        explain_no_irrigation(field)
    }
}

fn explain_no_irrigation(field: &FieldConditions) -> String {
    let moisture = field.moisture_pct;

    if moisture > field.profile.optimal_max {
        format!(
            "Your soil has enough water ({}%). No need to water now. \
             Wait for soil to dry a bit.",
            moisture
        )
    } else if field.rainfall_probability_pct > RAIN_DELAY_PROBABILITY_PCT {
        format!(
            "Rain is likely ({}% chance). Better to wait and let rain water your crop.",
            field.rainfall_probability_pct
        )
    } else {
        format!(
            "Soil moisture is okay at {}%. No watering needed right now.",
            moisture
        )
    }
}

fn explain_irrigation(field: &FieldConditions, water_mm: f64) -> String {
    let mut parts = vec![format!(
        "Your {} soil currently has {}% moisture.",
        field.soil_name, field.moisture_pct
    )];

    if field.moisture_pct < field.profile.wilting_point {
        parts.push("This is very low. Plants may start wilting soon.".to_string());
    } else {
        parts.push("This is below the ideal level for your crop.".to_string());
    }

    if field.is_flowering() {
        parts.push("Your crop is flowering now and needs good water supply.".to_string());
    }

    parts.push(format!("Apply about {}mm of water.", water_mm));

    if field.temperature_c > HOT_DAY_C {
        parts.push(format!(
            "It's hot ({}°C), so water in the morning or evening.",
            field.temperature_c
        ));
    }

    if field.rainfall_probability_pct > RAIN_REDUCTION_PROBABILITY_PCT {
        parts.push(format!(
            "Some rain may come ({}% chance), so we reduced the water amount.",
            field.rainfall_probability_pct
        ));
    }

    parts.join(" ")
}
