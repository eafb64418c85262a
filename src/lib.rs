//! Deterministic irrigation, fertilizer and yield advice for small farms.
//!
//! Every advisor is a pure function of its inputs: the same request always
//! produces the same advice, and unknown soils, crops or stages fall back
//! to documented defaults instead of failing.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use logic::decide;
