//! Locked-target extrapolation
//!
//! A locked target is rated at the skill it requires, then brought back to
//! present-day terms using how much the reference target's rates change
//! between the real skill and that same hypothetical skill. Only the
//! theoretical component is rescaled; the ceiling is an absolute throughput
//! limit and stays as evaluated.

use ahash::AHashMap;

use crate::core::error::{RankerError, Result};
use crate::core::types::SkillLevel;
use crate::network::{Actor, Target};
use crate::rates::{RateEngine, RateEstimate};
use crate::ranking::evaluator::{Rated, TargetRating};

/// real / hypothetical, or exactly 1 when the hypothetical rate is zero
pub fn scale_factor(real: f64, hypothetical: f64) -> f64 {
    if hypothetical == 0.0 {
        1.0
    } else {
        real / hypothetical
    }
}

/// Present-day correction derived from the reference target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub gain: f64,
    pub exp: f64,
}

impl ScaleFactors {
    pub fn from_reference(real: &TargetRating, hypothetical: &RateEstimate) -> Self {
        Self {
            gain: scale_factor(real.gain_rate, hypothetical.final_gain_rate()),
            exp: scale_factor(real.exp_rate, hypothetical.exp_rate),
        }
    }

    /// Rescale a hypothetical estimate; the ceiling is left alone
    pub fn apply(&self, hypothetical: &RateEstimate) -> RateEstimate {
        RateEstimate {
            theoretical_rate: hypothetical.theoretical_rate * self.gain,
            capped_rate: hypothetical.capped_rate,
            exp_rate: hypothetical.exp_rate * self.exp,
            fraction: hypothetical.fraction,
        }
    }
}

/// Locked targets ordered by required skill, ties by id
///
/// Returns a new view; `locked` keeps its order.
pub fn by_required_skill<'t>(locked: &[&'t Target]) -> Vec<&'t Target> {
    let mut ordered = locked.to_vec();
    ordered.sort_by(|a, b| {
        a.required_skill
            .cmp(&b.required_skill)
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
}

/// Project every locked target to a present-day rating
///
/// Fails with `NoReference` when there are locked targets but no reachable
/// target to scale against.
pub fn extrapolate(
    locked: &[&Target],
    reference: Option<&Rated<'_>>,
    actor: &Actor,
    engine: &RateEngine,
) -> Result<Vec<TargetRating>> {
    if locked.is_empty() {
        return Ok(Vec::new());
    }
    let reference = reference.ok_or(RankerError::NoReference {
        locked: locked.len(),
    })?;

    // Several locked targets often share a required skill
    let mut reference_at: AHashMap<SkillLevel, RateEstimate> = AHashMap::new();
    let mut projected = Vec::with_capacity(locked.len());

    for target in by_required_skill(locked) {
        let skill = target.required_skill;
        let reference_hypothetical = *reference_at
            .entry(skill)
            .or_insert_with(|| engine.estimate(reference.target, actor, skill).0);
        let scale = ScaleFactors::from_reference(&reference.rating, &reference_hypothetical);

        let (hypothetical, model) = engine.estimate(target, actor, skill);
        let estimate = scale.apply(&hypothetical);

        tracing::debug!(
            "Projected {} from skill {}: gain x{:.4}, exp x{:.4}",
            target.id,
            skill,
            scale.gain,
            scale.exp
        );

        let mut rating = TargetRating::new(target, estimate, model);
        rating.projected = true;
        projected.push(rating);
    }

    Ok(projected)
}
