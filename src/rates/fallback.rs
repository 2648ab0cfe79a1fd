//! Heuristic rate model used when no formula provider is available
//!
//! Only the currently observed weaken time is known, so hack time is
//! approximated from it and the whole pool is assumed taken each cycle.

use crate::network::Target;
use crate::rates::estimate::RateEstimate;

/// Shortest interval at which cycles can safely be scheduled (ms)
pub const MIN_CYCLE_TIME: f64 = 200.0;

/// Hack takes a quarter of the weaken time
const WEAKEN_TO_HACK_RATIO: f64 = 4.0;

const BASE_EXP_GAIN: f64 = 3.0;
const EXP_DIFFICULTY_FACTOR: f64 = 0.3;

/// Estimate rates from the observed weaken time (ms)
///
/// Experience multipliers are ignored; they scale every target equally.
pub fn evaluate_fallback(target: &Target, observed_weaken_time: f64) -> RateEstimate {
    let hack_time = observed_weaken_time / WEAKEN_TO_HACK_RATIO;
    if !(hack_time.is_finite() && hack_time > 0.0) {
        tracing::warn!(
            "No usable weaken time for {} ({}), rating it zero",
            target.id,
            observed_weaken_time
        );
        return RateEstimate {
            theoretical_rate: 0.0,
            capped_rate: 0.0,
            exp_rate: 0.0,
            fraction: 1.0,
        };
    }

    let capped_time = hack_time.max(MIN_CYCLE_TIME);
    let exp_gain = BASE_EXP_GAIN + target.min_difficulty * EXP_DIFFICULTY_FACTOR;

    RateEstimate {
        theoretical_rate: target.max_money / hack_time,
        capped_rate: target.max_money / capped_time,
        exp_rate: exp_gain / hack_time,
        fraction: 1.0,
    }
}
