use crate::models::WateringDay;
use chrono::{Days, NaiveDate};

/// Length of the watering timeline
pub const PLAN_DAYS: u64 = 7;

/// Seven-day watering timeline starting at `start`.
///
/// Nothing is scheduled unless irrigation is needed. When it is, the first
/// day always waters and later days repeat every `frequency_days`; a zero
/// frequency waters only the first day.
pub fn watering_plan(start: NaiveDate, frequency_days: u32, need_irrigation: bool) -> Vec<WateringDay> {
    (0..PLAN_DAYS)
        .filter_map(|i| {
            let date = start.checked_add_days(Days::new(i))?;
            let water = need_irrigation
                && (i == 0 || (frequency_days > 0 && i % u64::from(frequency_days) == 0));
            Some(WateringDay { date, water })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn pattern(plan: &[WateringDay]) -> Vec<bool> {
        plan.iter().map(|d| d.water).collect()
    }

    #[test]
    fn every_second_day() {
        let plan = watering_plan(start(), 2, true);
        assert_eq!(plan.len(), 7);
        assert_eq!(
            pattern(&plan),
            vec![true, false, true, false, true, false, true]
        );
        assert_eq!(plan[0].weekday(), "Mon");
        assert_eq!(plan[6].date, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
    }

    #[test]
    fn every_fifth_day() {
        let plan = watering_plan(start(), 5, true);
        assert_eq!(
            pattern(&plan),
            vec![true, false, false, false, false, true, false]
        );
    }

    #[test]
    fn no_need_means_no_watering() {
        let plan = watering_plan(start(), 3, false);
        assert_eq!(plan.len(), 7);
        assert!(plan.iter().all(|d| !d.water));
    }

    #[test]
    fn zero_frequency_waters_once() {
        let plan = watering_plan(start(), 0, true);
        assert_eq!(pattern(&plan).iter().filter(|w| **w).count(), 1);
        assert!(plan[0].water);
    }
}
