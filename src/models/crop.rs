use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Rice,
    Wheat,
    Cotton,
    Maize,
    Sugarcane,
    Soybean,
    Potato,
    Tomato,
    Onion,
    Groundnut,
}

impl Crop {
    pub const ALL: [Crop; 10] = [
        Crop::Rice,
        Crop::Wheat,
        Crop::Cotton,
        Crop::Maize,
        Crop::Sugarcane,
        Crop::Soybean,
        Crop::Potato,
        Crop::Tomato,
        Crop::Onion,
        Crop::Groundnut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Rice => "Rice",
            Crop::Wheat => "Wheat",
            Crop::Cotton => "Cotton",
            Crop::Maize => "Maize",
            Crop::Sugarcane => "Sugarcane",
            Crop::Soybean => "Soybean",
            Crop::Potato => "Potato",
            Crop::Tomato => "Tomato",
            Crop::Onion => "Onion",
            Crop::Groundnut => "Groundnut",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rice" => Some(Crop::Rice),
            "wheat" => Some(Crop::Wheat),
            "cotton" => Some(Crop::Cotton),
            "maize" => Some(Crop::Maize),
            "sugarcane" => Some(Crop::Sugarcane),
            "soybean" => Some(Crop::Soybean),
            "potato" => Some(Crop::Potato),
            "tomato" => Some(Crop::Tomato),
            "onion" => Some(Crop::Onion),
            "groundnut" => Some(Crop::Groundnut),
            _ => None,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropStage {
    Germination,
    Vegetative,
    Flowering,
    Fruiting,
    Harvest,
}

impl CropStage {
    pub const ALL: [CropStage; 5] = [
        CropStage::Germination,
        CropStage::Vegetative,
        CropStage::Flowering,
        CropStage::Fruiting,
        CropStage::Harvest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropStage::Germination => "Germination",
            CropStage::Vegetative => "Vegetative",
            CropStage::Flowering => "Flowering",
            CropStage::Fruiting => "Fruiting",
            CropStage::Harvest => "Harvest",
        }
    }

    /// Long-form label as shown on the fertilizer planner.
    pub fn label(&self) -> &'static str {
        match self {
            CropStage::Germination => "Seedling/Germination",
            CropStage::Vegetative => "Vegetative Growth",
            CropStage::Flowering => "Flowering",
            CropStage::Fruiting => "Fruiting/Grain Filling",
            CropStage::Harvest => "Maturity/Harvest",
        }
    }

    /// Strict lookup on the short stage names only.
    ///
    /// The irrigation tables treat anything else (including the long
    /// fertilizer labels) as an unknown stage.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "germination" => Some(CropStage::Germination),
            "vegetative" => Some(CropStage::Vegetative),
            "flowering" => Some(CropStage::Flowering),
            "fruiting" => Some(CropStage::Fruiting),
            "harvest" => Some(CropStage::Harvest),
            _ => None,
        }
    }

    /// Lenient lookup accepting both short names and long labels.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::from_str(s).or_else(|| match s.trim().to_lowercase().as_str() {
            "seedling" | "seedling/germination" => Some(CropStage::Germination),
            "vegetative growth" => Some(CropStage::Vegetative),
            "grain filling" | "fruiting/grain filling" => Some(CropStage::Fruiting),
            "maturity" | "maturity/harvest" => Some(CropStage::Harvest),
            _ => None,
        })
    }

    pub fn is_flowering(&self) -> bool {
        matches!(self, CropStage::Flowering)
    }
}

impl std::fmt::Display for CropStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationMethod {
    Drip,
    Flood,
    Furrow,
}

impl IrrigationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationMethod::Drip => "drip",
            IrrigationMethod::Flood => "flood",
            IrrigationMethod::Furrow => "furrow",
        }
    }
}

impl std::fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
