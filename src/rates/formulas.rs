//! Formula providers
//!
//! A `FormulaProvider` gives precise per-action costs and gains for a target
//! in given conditions and an actor at a given skill. `StandardFormulas`
//! implements the game's published formulas.

use thiserror::Error;

use crate::network::{Actor, TargetConditions};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("{formula} produced a non-finite value for {target}")]
    NonFinite { formula: &'static str, target: String },

    #[error("formula provider unavailable: {0}")]
    Unsupported(String),
}

pub type FormulaResult = std::result::Result<f64, FormulaError>;

/// Per-action costs and gains
///
/// Times are in milliseconds. Implementations must not retain or mutate the
/// actor; hypothetical skill levels arrive as derived snapshots.
pub trait FormulaProvider {
    fn hack_time(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult;
    fn grow_time(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult;
    fn weaken_time(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult;
    /// Proportional growth from one grow action (1.0 = no growth)
    fn grow_percent(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult;
    /// Fraction of money taken by one hack action
    fn hack_percent(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult;
    fn hack_chance(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult;
    /// Experience granted by one hack action
    fn hack_exp(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult;
}

// Hack time
const BASE_DIFFICULTY_TIME: f64 = 500.0;
const BASE_SKILL_TIME: f64 = 50.0;
const DIFFICULTY_TIME_FACTOR: f64 = 2.5;
const HACK_TIME_MULTIPLIER: f64 = 5.0;
const GROW_TIME_RATIO: f64 = 3.2;
const WEAKEN_TIME_RATIO: f64 = 4.0;

// Hack chance and percent
const HACK_CHANCE_FACTOR: f64 = 1.75;
const HACK_PERCENT_BALANCE: f64 = 240.0;

// Growth
const BASE_GROWTH_RATE: f64 = 1.03;
const MAX_GROWTH_RATE: f64 = 1.0035;

// Experience
const BASE_EXP_GAIN: f64 = 3.0;
const EXP_DIFFICULTY_FACTOR: f64 = 0.3;

/// The game's standard formulas
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormulas;

impl StandardFormulas {
    pub fn new() -> Self {
        Self
    }

    fn finite(formula: &'static str, target: &TargetConditions, value: f64) -> FormulaResult {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(FormulaError::NonFinite {
                formula,
                target: target.target.id.to_string(),
            })
        }
    }

    fn difficulty_mult(target: &TargetConditions) -> f64 {
        (100.0 - target.difficulty) / 100.0
    }
}

impl FormulaProvider for StandardFormulas {
    fn hack_time(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult {
        let difficulty = target.target.required_skill as f64 * target.difficulty;
        let skill_factor = (DIFFICULTY_TIME_FACTOR * difficulty + BASE_DIFFICULTY_TIME)
            / (actor.skill as f64 + BASE_SKILL_TIME);
        let seconds = HACK_TIME_MULTIPLIER * skill_factor / actor.multipliers.speed;
        Self::finite("hack_time", target, seconds * 1000.0)
    }

    fn grow_time(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult {
        Ok(self.hack_time(target, actor)? * GROW_TIME_RATIO)
    }

    fn weaken_time(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult {
        Ok(self.hack_time(target, actor)? * WEAKEN_TIME_RATIO)
    }

    fn grow_percent(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult {
        let rate = (1.0 + (BASE_GROWTH_RATE - 1.0) / target.difficulty).min(MAX_GROWTH_RATE);
        let cycles = target.target.growth / 100.0 * actor.multipliers.grow;
        Self::finite("grow_percent", target, rate.powf(cycles))
    }

    fn hack_percent(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult {
        let skill = actor.skill as f64;
        let skill_mult = (skill - (target.target.required_skill as f64 - 1.0)) / skill;
        let percent =
            Self::difficulty_mult(target) * skill_mult * actor.multipliers.money / HACK_PERCENT_BALANCE;
        Self::finite("hack_percent", target, percent).map(|p| p.clamp(0.0, 1.0))
    }

    fn hack_chance(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult {
        let skill_mult = HACK_CHANCE_FACTOR * actor.skill as f64;
        let skill_chance = (skill_mult - target.target.required_skill as f64) / skill_mult;
        let chance = skill_chance * Self::difficulty_mult(target) * actor.multipliers.chance;
        Self::finite("hack_chance", target, chance).map(|c| c.clamp(0.0, 1.0))
    }

    fn hack_exp(&self, target: &TargetConditions, actor: &Actor) -> FormulaResult {
        let exp = BASE_EXP_GAIN + target.target.base_difficulty() * EXP_DIFFICULTY_FACTOR;
        Self::finite("hack_exp", target, exp * actor.multipliers.exp)
    }
}
