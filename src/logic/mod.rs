pub mod explanation;
pub mod factors;
pub mod fertilizer;
pub mod irrigation;
pub mod risks;
pub mod schedule;
pub mod tables;
pub mod yield_estimator;

pub use fertilizer::{recommend_npk, FertilizerAdvisor, FertilizerRequest};
pub use irrigation::{decide, IrrigationAdvisor};
pub use schedule::watering_plan;
pub use yield_estimator::{estimate_yield, YieldAdvisor, YieldRequest};

/// A stateless advisor that turns a request into advice.
///
/// Advisors never fail: unrecognised categorical input falls back to a
/// documented default instead of producing an error.
pub trait Advisor: Send + Sync {
    type Request;
    type Advice;

    /// Unique identifier
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    fn advise(&self, request: &Self::Request) -> Self::Advice;
}

/// Round to one decimal place from the exact binary value, so 10.65
/// (stored just above the tie) gives 10.7.
pub fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
