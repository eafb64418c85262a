use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of a watering timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringDay {
    pub date: NaiveDate,
    pub water: bool,
}

impl WateringDay {
    pub fn weekday(&self) -> String {
        self.date.format("%a").to_string()
    }
}
