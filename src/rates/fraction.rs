//! Extraction-fraction estimation
//!
//! Decides how much of a target's money one cycle should take. In auto mode
//! the answer is bounded by two independent budgets: how many hack actions
//! the total capacity can afford, and how much regrowth it can afford.

use crate::core::error::{RankerError, Result};

/// Upper bound on the fraction taken per cycle
pub const MAX_EXTRACTION_FRACTION: f64 = 0.98;

/// Numeric floor for fractions and per-action gains
pub const MIN_GAIN: f64 = 1e-10;

/// A fraction validated to lie in (0, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplicitFraction(f64);

impl ExplicitFraction {
    pub fn get(self) -> f64 {
        self.0
    }
}

/// How the per-cycle fraction is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtractionMode {
    /// Largest fraction the capacity budget allows
    Auto,
    /// Fixed fraction requested by the user
    Explicit(ExplicitFraction),
}

impl ExtractionMode {
    /// Validate an explicit fraction
    pub fn explicit(fraction: f64) -> Result<Self> {
        if fraction > 0.0 && fraction < 1.0 {
            Ok(ExtractionMode::Explicit(ExplicitFraction(fraction)))
        } else {
            Err(RankerError::InvalidHackPercent(fraction * 100.0))
        }
    }

    /// Validate a percentage given on the command line (0-100, exclusive)
    pub fn from_percent(percent: f64) -> Result<Self> {
        if percent > 0.0 && percent < 100.0 {
            Self::explicit(percent / 100.0)
        } else {
            Err(RankerError::InvalidHackPercent(percent))
        }
    }
}

/// Per-cycle costs and gains for one target
#[derive(Debug, Clone, Copy)]
pub struct FractionInputs {
    /// Total capacity C
    pub capacity: f64,
    /// Capacity-time cost of one hack action
    pub hack_cost: f64,
    /// Capacity-time cost of one grow action
    pub grow_cost: f64,
    /// Fraction of money taken by one hack action
    pub hack_gain: f64,
    /// ln of the proportional growth from one grow action
    pub grow_gain: f64,
}

impl FractionInputs {
    /// Bound from the hack budget: C * g_h / hackCost
    pub fn hack_bound(&self) -> f64 {
        self.capacity * self.hack_gain / self.hack_cost
    }

    /// Bound from the regrowth budget: 1 - e^(-C * g_g / growCost)
    pub fn grow_bound(&self) -> f64 {
        1.0 - (-self.capacity * self.grow_gain / self.grow_cost).exp()
    }
}

/// Fraction of the target's money to extract per cycle
///
/// Always in (0, MAX_EXTRACTION_FRACTION]; explicit requests above the
/// ceiling are clamped to it.
pub fn estimate_fraction(mode: ExtractionMode, inputs: &FractionInputs) -> f64 {
    match mode {
        ExtractionMode::Explicit(requested) => {
            let fraction = requested.get();
            if fraction > MAX_EXTRACTION_FRACTION {
                tracing::warn!(
                    "Requested fraction {} above ceiling, using {}",
                    fraction,
                    MAX_EXTRACTION_FRACTION
                );
                MAX_EXTRACTION_FRACTION
            } else {
                fraction
            }
        }
        ExtractionMode::Auto => {
            let (hack, grow) = (inputs.hack_bound(), inputs.grow_bound());
            // f64::min drops a NaN operand, so a degenerate bound must poison the result
            let fraction = if hack.is_nan() || grow.is_nan() {
                f64::NAN
            } else {
                MAX_EXTRACTION_FRACTION.min(hack.min(grow))
            };
            if !(fraction > MIN_GAIN) {
                tracing::warn!(
                    "Extraction fraction {:e} at or below floor, using {:e} (capacity {}, hack cost {}, grow cost {})",
                    fraction,
                    MIN_GAIN,
                    inputs.capacity,
                    inputs.hack_cost,
                    inputs.grow_cost
                );
                MIN_GAIN
            } else {
                fraction
            }
        }
    }
}
