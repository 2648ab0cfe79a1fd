//! Rate estimation
//!
//! Money and experience per capacity-second for a target at a given skill,
//! from either the analytic model or the fallback heuristic.

pub mod analytic;
pub mod engine;
pub mod estimate;
pub mod fallback;
pub mod formulas;
pub mod fraction;

pub use analytic::Unavailable;
pub use engine::RateEngine;
pub use estimate::{RateEstimate, RateModel};
pub use fallback::evaluate_fallback;
pub use formulas::{FormulaError, FormulaProvider, StandardFormulas};
pub use fraction::{estimate_fraction, ExtractionMode, FractionInputs};
