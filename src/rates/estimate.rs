use serde::{Deserialize, Serialize};

/// Which model produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateModel {
    /// Precise cost/benefit model backed by a formula provider
    Analytic,
    /// Heuristic model using only observed timings
    Fallback,
}

impl RateModel {
    pub fn name(&self) -> &'static str {
        match self {
            RateModel::Analytic => "analytic",
            RateModel::Fallback => "fallback",
        }
    }
}

/// Yield rates for one target at one skill level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEstimate {
    /// Money per capacity-second ignoring practical throughput limits
    pub theoretical_rate: f64,
    /// Money per capacity-second under the practical ceiling
    pub capped_rate: f64,
    /// Experience per capacity-second
    pub exp_rate: f64,
    /// Share of the target's money taken per cycle
    pub fraction: f64,
}

impl RateEstimate {
    /// The rate used for ranking: min(theoretical, capped)
    pub fn final_gain_rate(&self) -> f64 {
        self.theoretical_rate.min(self.capped_rate)
    }
}
