//! Static reference tables for the irrigation engine.
//!
//! Every lookup takes an already-resolved `Option` key and applies the
//! documented default on a miss: loam for soil, wheat for crop, a flat
//! 5 mm/day for stage.

use crate::models::{Crop, CropStage, IrrigationMethod, SoilProfile, SoilType};

pub const CLAY: SoilProfile = SoilProfile {
    field_capacity: 45.0,
    wilting_point: 25.0,
    optimal_min: 35.0,
    optimal_max: 42.0,
    saturation: 80.0,
};

pub const LOAM: SoilProfile = SoilProfile {
    field_capacity: 35.0,
    wilting_point: 18.0,
    optimal_min: 25.0,
    optimal_max: 32.0,
    saturation: 75.0,
};

pub const SANDY: SoilProfile = SoilProfile {
    field_capacity: 25.0,
    wilting_point: 10.0,
    optimal_min: 15.0,
    optimal_max: 22.0,
    saturation: 65.0,
};

/// Daily need used when the stage is not in a crop's curve.
pub const DEFAULT_DAILY_WATER_MM: f64 = 5.0;

/// Days between irrigations when the soil is unknown.
pub const DEFAULT_FREQUENCY_DAYS: u32 = 3;

/// Daily crop water need (mm/day) by stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropWaterProfile {
    pub germination: f64,
    pub vegetative: f64,
    pub flowering: f64,
    pub harvest: f64,
}

impl CropWaterProfile {
    const fn new(germination: f64, vegetative: f64, flowering: f64, harvest: f64) -> Self {
        Self {
            germination,
            vegetative,
            flowering,
            harvest,
        }
    }

    /// `None` for stages the curve has no entry for.
    pub fn for_stage(&self, stage: CropStage) -> Option<f64> {
        match stage {
            CropStage::Germination => Some(self.germination),
            CropStage::Vegetative => Some(self.vegetative),
            CropStage::Flowering => Some(self.flowering),
            CropStage::Harvest => Some(self.harvest),
            CropStage::Fruiting => None,
        }
    }
}

pub fn soil_profile(soil: Option<SoilType>) -> SoilProfile {
    match soil {
        Some(SoilType::Clay) => CLAY,
        Some(SoilType::Sandy) => SANDY,
        _ => LOAM,
    }
}

pub fn crop_water_profile(crop: Option<Crop>) -> CropWaterProfile {
    match crop.unwrap_or(Crop::Wheat) {
        Crop::Rice => CropWaterProfile::new(5.0, 7.0, 9.0, 3.0),
        Crop::Wheat => CropWaterProfile::new(3.0, 5.0, 6.0, 2.0),
        Crop::Cotton => CropWaterProfile::new(4.0, 6.0, 8.0, 3.0),
        Crop::Maize => CropWaterProfile::new(3.5, 5.5, 7.0, 2.5),
        Crop::Sugarcane => CropWaterProfile::new(6.0, 8.0, 10.0, 4.0),
        Crop::Soybean => CropWaterProfile::new(3.0, 5.0, 6.5, 2.0),
        Crop::Potato => CropWaterProfile::new(3.0, 4.5, 5.5, 2.0),
        Crop::Tomato => CropWaterProfile::new(3.5, 5.0, 6.0, 2.5),
        Crop::Onion => CropWaterProfile::new(3.0, 4.5, 5.0, 2.0),
        Crop::Groundnut => CropWaterProfile::new(3.5, 5.0, 6.5, 2.5),
    }
}

pub fn daily_water_need_mm(crop: Option<Crop>, stage: Option<CropStage>) -> f64 {
    stage
        .and_then(|s| crop_water_profile(crop).for_stage(s))
        .unwrap_or(DEFAULT_DAILY_WATER_MM)
}

pub fn irrigation_frequency_days(soil: Option<SoilType>) -> u32 {
    match soil {
        Some(SoilType::Sandy) => 2,
        Some(SoilType::Loam) => 3,
        Some(SoilType::Clay) => 5,
        _ => DEFAULT_FREQUENCY_DAYS,
    }
}

pub fn irrigation_method(crop: Option<Crop>) -> IrrigationMethod {
    match crop {
        Some(Crop::Rice) => IrrigationMethod::Flood,
        Some(Crop::Sugarcane) => IrrigationMethod::Furrow,
        _ => IrrigationMethod::Drip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soil_profiles_are_ordered() {
        for profile in [CLAY, LOAM, SANDY] {
            assert!(profile.wilting_point < profile.optimal_min);
            assert!(profile.optimal_min < profile.optimal_max);
            assert!(profile.optimal_max < profile.saturation);
        }
    }

    #[test]
    fn unknown_soil_defaults_to_loam() {
        assert_eq!(soil_profile(None), LOAM);
        assert_eq!(soil_profile(Some(SoilType::Peaty)), LOAM);
        assert_eq!(soil_profile(Some(SoilType::Clay)), CLAY);
    }

    #[test]
    fn unknown_crop_uses_wheat_curve() {
        assert_eq!(crop_water_profile(None), crop_water_profile(Some(Crop::Wheat)));
        assert_eq!(daily_water_need_mm(None, Some(CropStage::Flowering)), 6.0);
    }

    #[test]
    fn unknown_stage_uses_flat_default() {
        assert_eq!(daily_water_need_mm(Some(Crop::Rice), None), 5.0);
        assert_eq!(
            daily_water_need_mm(Some(Crop::Sugarcane), Some(CropStage::Fruiting)),
            DEFAULT_DAILY_WATER_MM
        );
        assert_eq!(daily_water_need_mm(Some(Crop::Rice), Some(CropStage::Vegetative)), 7.0);
    }

    #[test]
    fn every_crop_peaks_at_flowering() {
        for crop in Crop::ALL {
            let curve = crop_water_profile(Some(crop));
            assert!(curve.flowering >= curve.vegetative, "{}", crop);
            assert!(curve.vegetative > curve.harvest, "{}", crop);
        }
    }

    #[test]
    fn frequency_ordering() {
        let sandy = irrigation_frequency_days(Some(SoilType::Sandy));
        let loam = irrigation_frequency_days(Some(SoilType::Loam));
        let clay = irrigation_frequency_days(Some(SoilType::Clay));
        assert!(sandy < loam && loam < clay);
        assert_eq!(irrigation_frequency_days(None), 3);
    }

    #[test]
    fn methods_by_crop() {
        assert_eq!(irrigation_method(Some(Crop::Rice)), IrrigationMethod::Flood);
        assert_eq!(irrigation_method(Some(Crop::Sugarcane)), IrrigationMethod::Furrow);
        assert_eq!(irrigation_method(Some(Crop::Wheat)), IrrigationMethod::Drip);
        assert_eq!(irrigation_method(None), IrrigationMethod::Drip);
    }
}
