//! The actor performing extraction
//!
//! Hypothetical skill levels are modeled by deriving a new snapshot with
//! `at_skill`; the original actor is never touched.

use serde::{Deserialize, Serialize};

use crate::core::types::SkillLevel;

/// Multipliers applied by the standard formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorMultipliers {
    pub money: f64,
    pub chance: f64,
    pub speed: f64,
    pub grow: f64,
    pub exp: f64,
}

impl Default for ActorMultipliers {
    fn default() -> Self {
        Self {
            money: 1.0,
            chance: 1.0,
            speed: 1.0,
            grow: 1.0,
            exp: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Actor {
    pub skill: SkillLevel,
    #[serde(default)]
    pub multipliers: ActorMultipliers,
}

impl Actor {
    pub fn new(skill: SkillLevel) -> Self {
        Self {
            skill,
            multipliers: ActorMultipliers::default(),
        }
    }

    /// Snapshot of this actor at another skill level
    pub fn at_skill(&self, skill: SkillLevel) -> Actor {
        Actor { skill, ..*self }
    }

    pub fn can_reach(&self, required_skill: SkillLevel) -> bool {
        required_skill <= self.skill
    }
}
