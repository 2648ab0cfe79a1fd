//! Target evaluation
//!
//! Splits rankable targets into those the actor can hack now and those still
//! locked behind a skill requirement, and rates the former at the real skill.

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::core::types::{SkillLevel, TargetId};
use crate::network::{Actor, Target};
use crate::rates::{RateEngine, RateEstimate, RateModel};

/// Result of rating one target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetRating {
    pub id: TargetId,
    pub required_skill: SkillLevel,
    pub estimate: RateEstimate,
    pub model: RateModel,
    /// min(theoretical, capped); the ranking key
    pub gain_rate: f64,
    pub exp_rate: f64,
    /// Extrapolated from a hypothetical skill level
    pub projected: bool,
}

impl TargetRating {
    pub fn new(target: &Target, estimate: RateEstimate, model: RateModel) -> Self {
        Self {
            id: target.id.clone(),
            required_skill: target.required_skill,
            gain_rate: estimate.final_gain_rate(),
            exp_rate: estimate.exp_rate,
            estimate,
            model,
            projected: false,
        }
    }
}

/// A reachable target and its rating at the real skill
#[derive(Debug, Clone)]
pub struct Rated<'t> {
    pub target: &'t Target,
    pub rating: TargetRating,
}

#[derive(Debug, Clone, Default)]
pub struct Evaluation<'t> {
    pub reachable: Vec<Rated<'t>>,
    /// Rankable targets above the actor's skill, in input order
    pub locked: Vec<&'t Target>,
}

impl<'t> Evaluation<'t> {
    /// Best reachable target by gain rate; ties go to the smaller id
    pub fn reference(&self) -> Option<&Rated<'t>> {
        self.reachable.iter().max_by(|a, b| {
            OrderedFloat(a.rating.gain_rate)
                .cmp(&OrderedFloat(b.rating.gain_rate))
                .then_with(|| b.rating.id.cmp(&a.rating.id))
        })
    }

    pub fn ratings(&self) -> impl Iterator<Item = &TargetRating> {
        self.reachable.iter().map(|r| &r.rating)
    }
}

/// Partition and rate targets
///
/// `include_inaccessible` admits targets without access granted.
pub fn evaluate_targets<'t>(
    targets: &'t [Target],
    actor: &Actor,
    engine: &RateEngine,
    include_inaccessible: bool,
) -> Evaluation<'t> {
    let mut evaluation = Evaluation::default();

    for target in targets.iter().filter(|t| t.is_rankable(include_inaccessible)) {
        if !actor.can_reach(target.required_skill) {
            evaluation.locked.push(target);
            continue;
        }
        let (estimate, model) = engine.estimate(target, actor, actor.skill);
        evaluation.reachable.push(Rated {
            target,
            rating: TargetRating::new(target, estimate, model),
        });
    }

    tracing::debug!(
        "{} reachable and {} locked targets at skill {}",
        evaluation.reachable.len(),
        evaluation.locked.len(),
        actor.skill
    );
    evaluation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::ExtractionMode;

    fn network() -> Vec<Target> {
        vec![
            Target::new("home", 0.0, 1.0, 1).owned().with_capacity(64.0),
            Target::new("n00dles", 70_000.0, 1.0, 1).with_weaken_time(40_000.0),
            Target::new("foodnstuff", 2_000_000.0, 3.0, 1).with_weaken_time(80_000.0),
            Target::new("joesguns", 2_500_000.0, 5.0, 10).with_weaken_time(100_000.0),
            Target::new("CSEC", 1_000_000.0, 5.0, 50).with_access(false),
        ]
    }

    #[test]
    fn test_partition_by_skill() {
        let targets = network();
        let engine = RateEngine::new(None, 64.0, ExtractionMode::Auto);
        let evaluation = evaluate_targets(&targets, &Actor::new(5), &engine, false);

        let reachable: Vec<_> = evaluation.ratings().map(|r| r.id.as_str()).collect();
        assert_eq!(reachable, vec!["n00dles", "foodnstuff"]);
        let locked: Vec<_> = evaluation.locked.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(locked, vec!["joesguns"]);
    }

    #[test]
    fn test_all_admits_inaccessible() {
        let targets = network();
        let engine = RateEngine::new(None, 64.0, ExtractionMode::Auto);
        let evaluation = evaluate_targets(&targets, &Actor::new(5), &engine, true);
        assert_eq!(evaluation.locked.len(), 2);
    }

    #[test]
    fn test_reference_is_best_gain() {
        let targets = network();
        let engine = RateEngine::new(None, 64.0, ExtractionMode::Auto);
        let evaluation = evaluate_targets(&targets, &Actor::new(5), &engine, false);
        let reference = evaluation.reference().unwrap();
        // 2e6 / 20000 = 100 beats 7e4 / 10000 = 7
        assert_eq!(reference.rating.id.as_str(), "foodnstuff");
        assert!((reference.rating.gain_rate - 100.0).abs() < 1e-9);
        for rating in evaluation.ratings() {
            assert_eq!(rating.gain_rate, rating.estimate.theoretical_rate.min(rating.estimate.capped_rate));
        }
    }

    #[test]
    fn test_reference_tie_prefers_smaller_id() {
        let targets = vec![
            Target::new("zeta", 1000.0, 1.0, 1).with_weaken_time(4000.0),
            Target::new("alpha", 1000.0, 1.0, 1).with_weaken_time(4000.0),
        ];
        let engine = RateEngine::new(None, 8.0, ExtractionMode::Auto);
        let evaluation = evaluate_targets(&targets, &Actor::new(1), &engine, false);
        assert_eq!(evaluation.reference().unwrap().rating.id.as_str(), "alpha");
    }

    #[test]
    fn test_no_reachable_targets() {
        let targets = vec![Target::new("CSEC", 1000.0, 1.0, 50)];
        let engine = RateEngine::new(None, 8.0, ExtractionMode::Auto);
        let evaluation = evaluate_targets(&targets, &Actor::new(1), &engine, false);
        assert!(evaluation.reference().is_none());
        assert_eq!(evaluation.locked.len(), 1);
    }
}
