//! Target ranking
//!
//! Reachable targets are rated first to establish the reference target, then
//! locked targets are projected against it, and the merged list is ordered
//! by gain and by exp.

pub mod evaluator;
pub mod export;
pub mod extrapolation;
pub mod report;

pub use evaluator::{evaluate_targets, Evaluation, Rated, TargetRating};
pub use export::{sort_by_gain, top_by_exp, JsonFileSink, RankedRecord, RecordSink, TOP_EXP_COUNT};
pub use extrapolation::{extrapolate, scale_factor, ScaleFactors};
pub use report::{format_rate, log_lists, render_headline, render_lists, render_summary};

use crate::core::config::RankerConfig;
use crate::core::error::Result;
use crate::network::{total_capacity, NetworkSnapshot};
use crate::rates::{FormulaProvider, RateEngine};

/// Outcome of one run
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Best reachable target, used as the extrapolation baseline
    pub reference: Option<TargetRating>,
    /// Every rated target, highest gain first
    pub by_gain: Vec<TargetRating>,
    /// Top targets by exp rate
    pub by_exp: Vec<TargetRating>,
}

impl Ranking {
    pub fn best(&self) -> Option<&TargetRating> {
        self.by_gain.first()
    }

    /// Records handed to the persistence sink, in gain order
    pub fn records(&self) -> Vec<RankedRecord> {
        self.by_gain.iter().map(RankedRecord::from).collect()
    }
}

/// Rate, extrapolate, and order every rankable target in `snapshot`
///
/// `provider` is ignored when `disable_formulas_api` is set. Invalid
/// options fail before any target is scored.
pub fn rank_targets(
    snapshot: &NetworkSnapshot,
    config: &RankerConfig,
    provider: Option<&dyn FormulaProvider>,
) -> Result<Ranking> {
    config.validate()?;
    let mode = config.extraction_mode()?;

    let actor = match config.at_hack_level {
        Some(level) => snapshot.actor.at_skill(level),
        None => snapshot.actor,
    };
    let provider = if config.disable_formulas_api { None } else { provider };
    let capacity = total_capacity(&snapshot.targets, config.include_hacknet_ram);
    let engine = RateEngine::new(provider, capacity, mode);

    tracing::info!(
        "Ranking {} targets at skill {} with {:.1} capacity ({} model)",
        snapshot.targets.len(),
        actor.skill,
        capacity,
        if engine.has_formulas() { "analytic" } else { "fallback" }
    );

    let evaluation = evaluate_targets(&snapshot.targets, &actor, &engine, config.all);
    let reference = evaluation.reference();
    let projected = extrapolation::extrapolate(&evaluation.locked, reference, &actor, &engine)?;

    let merged: Vec<TargetRating> = evaluation.ratings().cloned().chain(projected).collect();
    Ok(Ranking {
        reference: reference.map(|r| r.rating.clone()),
        by_gain: sort_by_gain(&merged),
        by_exp: top_by_exp(&merged, TOP_EXP_COUNT),
    })
}
