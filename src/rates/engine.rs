//! Analytic model with fallback
//!
//! The engine is the single entry point the ranking layer uses. It tries the
//! analytic model and dispatches to the heuristic when that is unavailable.

use crate::core::types::SkillLevel;
use crate::network::{Actor, Target};
use crate::rates::analytic::{self, Unavailable};
use crate::rates::estimate::{RateEstimate, RateModel};
use crate::rates::fallback::evaluate_fallback;
use crate::rates::formulas::FormulaProvider;
use crate::rates::fraction::ExtractionMode;

/// Shared inputs for every estimate of a run
#[derive(Clone, Copy)]
pub struct RateEngine<'a> {
    provider: Option<&'a dyn FormulaProvider>,
    capacity: f64,
    mode: ExtractionMode,
}

impl<'a> RateEngine<'a> {
    /// `provider` is `None` when formulas are absent or disabled
    pub fn new(provider: Option<&'a dyn FormulaProvider>, capacity: f64, mode: ExtractionMode) -> Self {
        Self {
            provider,
            capacity,
            mode,
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    pub fn has_formulas(&self) -> bool {
        self.provider.is_some()
    }

    /// Estimate `target` for `actor` at `skill`, falling back when needed
    pub fn estimate(&self, target: &Target, actor: &Actor, skill: SkillLevel) -> (RateEstimate, RateModel) {
        match analytic::evaluate(target, actor, skill, self.provider, self.capacity, self.mode) {
            Ok(estimate) => (estimate, RateModel::Analytic),
            Err(reason) => {
                if !matches!(reason, Unavailable::NoProvider) {
                    tracing::debug!("Analytic model unavailable for {} at {}: {}", target.id, skill, reason);
                }
                (evaluate_fallback(target, target.weaken_time), RateModel::Fallback)
            }
        }
    }
}

impl std::fmt::Debug for RateEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateEngine")
            .field("formulas", &self.provider.is_some())
            .field("capacity", &self.capacity)
            .field("mode", &self.mode)
            .finish()
    }
}
