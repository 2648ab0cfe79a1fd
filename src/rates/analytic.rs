//! Analytic rate model
//!
//! Prices a full hack/grow/weaken cycle against a target held at minimum
//! security and maximum money, using a formula provider for per-action
//! times and gains. Rates are money (or exp) per capacity-second.

use std::fmt;

use crate::core::types::{SkillLevel, MS_PER_SECOND};
use crate::network::{Actor, Target};
use crate::rates::estimate::RateEstimate;
use crate::rates::formulas::{FormulaError, FormulaProvider};
use crate::rates::fraction::{estimate_fraction, ExtractionMode, FractionInputs, MIN_GAIN};

/// Capacity footprint of one hack action
pub const HACK_FOOTPRINT: f64 = 1.7;
/// Capacity footprint of one grow action
pub const GROW_FOOTPRINT: f64 = 1.75;
/// Capacity footprint of one weaken action
pub const WEAKEN_FOOTPRINT: f64 = 1.75;

/// Security added by one grow action
const GROW_SECURITY: f64 = 0.004;
/// Security added by one hack action
const HACK_SECURITY: f64 = 0.002;
/// Security removed by one weaken action
const WEAKEN_SECURITY: f64 = 0.05;

/// Share of a weaken action each grow action needs
pub const GROW_WEAKEN_SHARE: f64 = GROW_SECURITY / WEAKEN_SECURITY;
/// Share of a weaken action each hack action needs
pub const HACK_WEAKEN_SHARE: f64 = HACK_SECURITY / WEAKEN_SECURITY;

/// The analytic model could not produce an estimate
#[derive(Debug, Clone, PartialEq)]
pub enum Unavailable {
    /// No formula provider was supplied
    NoProvider,
    /// The provider failed for this target
    Provider(FormulaError),
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::NoProvider => f.write_str("no formula provider"),
            Unavailable::Provider(err) => write!(f, "{}", err),
        }
    }
}

impl From<FormulaError> for Unavailable {
    fn from(err: FormulaError) -> Self {
        Unavailable::Provider(err)
    }
}

/// Per-cycle costs of a target, in capacity-milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionCosts {
    pub hack: f64,
    pub grow: f64,
    pub weaken: f64,
}

impl ActionCosts {
    /// Convert action times to capacity-time costs
    ///
    /// Grow and hack each carry their share of the weaken work they cause.
    pub fn from_times(hack_time: f64, grow_time: f64, weaken_time: f64) -> Self {
        let weaken = weaken_time * WEAKEN_FOOTPRINT;
        Self {
            hack: hack_time * HACK_FOOTPRINT + weaken * HACK_WEAKEN_SHARE,
            grow: grow_time * GROW_FOOTPRINT + weaken * GROW_WEAKEN_SHARE,
            weaken,
        }
    }
}

fn floor_gain(name: &str, target: &Target, gain: f64) -> f64 {
    if gain > MIN_GAIN {
        gain
    } else {
        tracing::warn!(
            "{} gain {:e} for {} at or below floor, using {:e}",
            name,
            gain,
            target.id,
            MIN_GAIN
        );
        MIN_GAIN
    }
}

/// Estimate rates for `target` as if the actor had `skill`
///
/// `capacity` is the total capacity C shared by all targets.
pub fn evaluate(
    target: &Target,
    actor: &Actor,
    skill: SkillLevel,
    provider: Option<&dyn FormulaProvider>,
    capacity: f64,
    mode: ExtractionMode,
) -> Result<RateEstimate, Unavailable> {
    let provider = provider.ok_or(Unavailable::NoProvider)?;
    let actor = actor.at_skill(skill);
    let conditions = target.primed();

    let costs = ActionCosts::from_times(
        provider.hack_time(&conditions, &actor)?,
        provider.grow_time(&conditions, &actor)?,
        provider.weaken_time(&conditions, &actor)?,
    );
    let grow_gain = floor_gain("Growth", target, provider.grow_percent(&conditions, &actor)?.ln());
    let hack_gain = floor_gain("Hack", target, provider.hack_percent(&conditions, &actor)?);
    let hack_chance = provider.hack_chance(&conditions, &actor)?;
    let hack_exp = provider.hack_exp(&conditions, &actor)?;

    let fraction = estimate_fraction(
        mode,
        &FractionInputs {
            capacity,
            hack_cost: costs.hack,
            grow_cost: costs.grow,
            hack_gain,
            grow_gain,
        },
    );
    let grow_cycles = -(1.0 - fraction).ln() / grow_gain;
    let hack_cycles = fraction / hack_gain;

    let profit = target.max_money * fraction * hack_chance;
    let cycle_cost = costs.grow * grow_cycles + costs.hack * hack_cycles;
    let theoretical_rate = profit / cycle_cost * MS_PER_SECOND;
    let capped_rate = theoretical_rate.min(profit / capacity);
    let exp_rate = hack_exp * (1.0 + HACK_WEAKEN_SHARE) / costs.hack * MS_PER_SECOND;

    tracing::trace!(
        "{} @ {}: fraction {:.4}, theoretical {:.4}, capped {:.4}, exp {:.6}",
        target.id,
        skill,
        fraction,
        theoretical_rate,
        capped_rate,
        exp_rate
    );

    Ok(RateEstimate {
        theoretical_rate,
        capped_rate,
        exp_rate,
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::TargetConditions;
    use crate::rates::formulas::{FormulaResult, StandardFormulas};

    /// Provider returning fixed values regardless of skill
    struct FixedFormulas {
        hack_time: f64,
        grow_percent: f64,
        hack_percent: f64,
        hack_chance: f64,
        hack_exp: f64,
    }

    impl FormulaProvider for FixedFormulas {
        fn hack_time(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(self.hack_time)
        }
        fn grow_time(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(self.hack_time * 3.2)
        }
        fn weaken_time(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(self.hack_time * 4.0)
        }
        fn grow_percent(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(self.grow_percent)
        }
        fn hack_percent(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(self.hack_percent)
        }
        fn hack_chance(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(self.hack_chance)
        }
        fn hack_exp(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(self.hack_exp)
        }
    }

    struct BrokenFormulas;

    impl FormulaProvider for BrokenFormulas {
        fn hack_time(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Err(FormulaError::Unsupported("offline".into()))
        }
        fn grow_time(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(1.0)
        }
        fn weaken_time(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(1.0)
        }
        fn grow_percent(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(1.0)
        }
        fn hack_percent(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(1.0)
        }
        fn hack_chance(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(1.0)
        }
        fn hack_exp(&self, _: &TargetConditions, _: &Actor) -> FormulaResult {
            Ok(1.0)
        }
    }

    fn fixed() -> FixedFormulas {
        FixedFormulas {
            hack_time: 1000.0,
            grow_percent: 1.1,
            hack_percent: 0.01,
            hack_chance: 0.5,
            hack_exp: 4.0,
        }
    }

    #[test]
    fn test_action_costs() {
        let costs = ActionCosts::from_times(1000.0, 3200.0, 4000.0);
        assert!((costs.weaken - 7000.0).abs() < 1e-9);
        assert!((costs.hack - (1700.0 + 7000.0 * 0.04)).abs() < 1e-9);
        assert!((costs.grow - (5600.0 + 7000.0 * 0.08)).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_fraction_rates() {
        let target = Target::new("joesguns", 1_000_000.0, 5.0, 10);
        let provider = fixed();
        let estimate = evaluate(
            &target,
            &Actor::new(10),
            10,
            Some(&provider),
            1000.0,
            ExtractionMode::explicit(0.5).unwrap(),
        )
        .unwrap();

        let costs = ActionCosts::from_times(1000.0, 3200.0, 4000.0);
        let grow_cycles = -(0.5f64).ln() / 1.1f64.ln();
        let hack_cycles = 0.5 / 0.01;
        let profit = 1_000_000.0 * 0.5 * 0.5;
        let theoretical = profit / (costs.grow * grow_cycles + costs.hack * hack_cycles) * 1000.0;

        assert_eq!(estimate.fraction, 0.5);
        assert!((estimate.theoretical_rate - theoretical).abs() < 1e-9);
        assert!((estimate.capped_rate - theoretical.min(profit / 1000.0)).abs() < 1e-9);
        assert!((estimate.exp_rate - 4.0 * 1.04 / costs.hack * 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_capped_rate_limited_by_capacity_share() {
        let target = Target::new("ecorp", 1e12, 1.0, 1);
        let provider = fixed();
        let estimate = evaluate(
            &target,
            &Actor::new(1),
            1,
            Some(&provider),
            1e9,
            ExtractionMode::explicit(0.9).unwrap(),
        )
        .unwrap();
        let profit = 1e12 * 0.9 * 0.5;
        assert!(estimate.capped_rate <= estimate.theoretical_rate);
        assert!((estimate.capped_rate - estimate.theoretical_rate.min(profit / 1e9)).abs() < 1e-9);
        assert_eq!(estimate.final_gain_rate(), estimate.capped_rate);
    }

    #[test]
    fn test_auto_fraction_within_bounds() {
        let target = Target::new("n00dles", 1_750_000.0, 1.0, 1).with_growth(3000.0);
        let estimate = evaluate(
            &target,
            &Actor::new(100),
            100,
            Some(&StandardFormulas),
            512.0,
            ExtractionMode::Auto,
        )
        .unwrap();
        assert!(estimate.fraction > 0.0 && estimate.fraction <= 0.98);
        assert!(estimate.theoretical_rate.is_finite());
        assert!(estimate.exp_rate > 0.0);
    }

    #[test]
    fn test_zero_hack_gain_is_floored() {
        let target = Target::new("joesguns", 1_000_000.0, 5.0, 10);
        let provider = FixedFormulas {
            hack_percent: 0.0,
            ..fixed()
        };
        let estimate = evaluate(
            &target,
            &Actor::new(10),
            10,
            Some(&provider),
            1000.0,
            ExtractionMode::Auto,
        )
        .unwrap();
        assert!(estimate.fraction >= MIN_GAIN);
        assert!(estimate.theoretical_rate.is_finite());
    }

    #[test]
    fn test_missing_provider_is_unavailable() {
        let target = Target::new("joesguns", 1_000_000.0, 5.0, 10);
        let result = evaluate(&target, &Actor::new(10), 10, None, 1000.0, ExtractionMode::Auto);
        assert_eq!(result, Err(Unavailable::NoProvider));
    }

    #[test]
    fn test_failing_provider_is_unavailable() {
        let target = Target::new("joesguns", 1_000_000.0, 5.0, 10);
        let actor = Actor::new(10);
        let result = evaluate(&target, &actor, 500, Some(&BrokenFormulas), 1000.0, ExtractionMode::Auto);
        assert!(matches!(result, Err(Unavailable::Provider(FormulaError::Unsupported(_)))));
        assert_eq!(actor.skill, 10);
    }

    #[test]
    fn test_zero_skill_with_standard_formulas_is_unavailable() {
        let target = Target::new("n00dles", 1_750_000.0, 1.0, 1);
        let result = evaluate(
            &target,
            &Actor::new(0),
            0,
            Some(&StandardFormulas),
            64.0,
            ExtractionMode::Auto,
        );
        assert!(matches!(result, Err(Unavailable::Provider(FormulaError::NonFinite { .. }))));
    }
}
