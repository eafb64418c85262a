pub mod crop;
pub mod decision;
pub mod fertilizer;
pub mod plan;
pub mod risk;
pub mod soil;
pub mod yield_estimate;

pub use crop::*;
pub use decision::*;
pub use fertilizer::*;
pub use plan::*;
pub use risk::*;
pub use soil::*;
pub use yield_estimate::*;
