//! Target records as reported by a network scan
//!
//! Targets are read-only inputs. Derived results live in separate
//! `RateEstimate` / `TargetRating` values keyed by `TargetId`.

use serde::{Deserialize, Serialize};

use crate::core::types::{SkillLevel, TargetId};

/// Node category, used by the capacity aggregation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    #[default]
    Standard,
    /// Reserved category; only counted towards capacity on request
    Hacknet,
}

/// A remote node that can be exploited for money and experience
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    /// Maximum money the node can hold
    pub max_money: f64,
    /// Lowest reachable security level
    pub min_difficulty: f64,
    /// Starting security level; falls back to 3x the minimum when not reported
    #[serde(default)]
    pub base_difficulty: Option<f64>,
    /// Skill level required before the node can be hacked
    pub required_skill: SkillLevel,
    #[serde(default)]
    pub has_access: bool,
    /// Nodes we own (home, purchased) are never ranked
    #[serde(default)]
    pub owned: bool,
    /// Growth parameter of the node
    #[serde(default = "default_growth")]
    pub growth: f64,
    /// Compute capacity (RAM) this node contributes when accessible
    #[serde(default)]
    pub max_capacity: f64,
    #[serde(default)]
    pub category: NodeCategory,
    /// Currently observed weaken time in milliseconds
    #[serde(default)]
    pub weaken_time: f64,
}

fn default_growth() -> f64 {
    1.0
}

impl Target {
    pub fn new(id: impl Into<String>, max_money: f64, min_difficulty: f64, required_skill: SkillLevel) -> Self {
        Self {
            id: TargetId::new(id),
            max_money,
            min_difficulty,
            base_difficulty: None,
            required_skill,
            has_access: true,
            owned: false,
            growth: default_growth(),
            max_capacity: 0.0,
            category: NodeCategory::Standard,
            weaken_time: 0.0,
        }
    }

    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.max_capacity = capacity;
        self
    }

    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    pub fn with_weaken_time(mut self, weaken_time: f64) -> Self {
        self.weaken_time = weaken_time;
        self
    }

    pub fn with_access(mut self, has_access: bool) -> Self {
        self.has_access = has_access;
        self
    }

    pub fn owned(mut self) -> Self {
        self.owned = true;
        self
    }

    pub fn hacknet(mut self) -> Self {
        self.category = NodeCategory::Hacknet;
        self
    }

    pub fn base_difficulty(&self) -> f64 {
        self.base_difficulty.unwrap_or(self.min_difficulty * 3.0)
    }

    /// Whether the target may appear in the ranking at all
    pub fn is_rankable(&self, include_inaccessible: bool) -> bool {
        !self.owned && self.max_money > 0.0 && (self.has_access || include_inaccessible)
    }

    /// Best-case steady state: security at minimum, money at maximum
    pub fn primed(&self) -> TargetConditions<'_> {
        TargetConditions {
            target: self,
            difficulty: self.min_difficulty,
            money: self.max_money,
        }
    }
}

/// A target together with the state it is assumed to be in
#[derive(Debug, Clone, Copy)]
pub struct TargetConditions<'a> {
    pub target: &'a Target,
    pub difficulty: f64,
    pub money: f64,
}
