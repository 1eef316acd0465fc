pub mod bmi;
pub mod engine;
pub mod factors;

pub use bmi::compute_bmi;
pub use engine::{compute_score, Band, Factor, FactorScore, ScoreResult, MAX_TOTAL};
