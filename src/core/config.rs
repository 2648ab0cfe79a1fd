//! Run configuration
//!
//! Options may come from a TOML file and are then overridden by command-line
//! flags. Every option has a default so an empty file is a valid config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{RankerError, Result};
use crate::core::types::SkillLevel;
use crate::rates::fraction::ExtractionMode;

/// Default location of the exported ranking, read by downstream schedulers
pub const DEFAULT_OUTPUT_PATH: &str = "data/ranked_targets.json";

/// Options controlling a single ranking run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerConfig {
    /// Also rank targets we have not been granted access to
    ///
    /// Independent of the reachable/locked skill partition used for
    /// extrapolation.
    pub all: bool,

    /// Suppress the headline summary
    pub silent: bool,

    /// Override the actor's skill level for the whole run
    pub at_hack_level: Option<SkillLevel>,

    /// Explicit extraction percentage per cycle (0-100, exclusive)
    ///
    /// When unset the estimator picks the largest feasible fraction.
    pub hack_percent: Option<f64>,

    /// Count hacknet node capacity towards the total capacity
    pub include_hacknet_ram: bool,

    /// Never consult the formula provider, always use the fallback model
    pub disable_formulas_api: bool,

    /// Where the ranked records are written
    pub output: PathBuf,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            all: false,
            silent: false,
            at_hack_level: None,
            hack_percent: None,
            include_hacknet_ram: false,
            disable_formulas_api: false,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl RankerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the extraction policy, rejecting out-of-range percentages
    pub fn extraction_mode(&self) -> Result<ExtractionMode> {
        match self.hack_percent {
            None => Ok(ExtractionMode::Auto),
            Some(percent) => ExtractionMode::from_percent(percent),
        }
    }

    /// Validate configuration before any target is scored
    pub fn validate(&self) -> Result<()> {
        self.extraction_mode()?;
        if self.output.as_os_str().is_empty() {
            return Err(RankerError::InvalidConfig("output path is empty".into()));
        }
        Ok(())
    }
}

/// Load a config from a TOML file
pub fn load_config(path: &Path) -> Result<RankerConfig> {
    let contents = fs::read_to_string(path)?;
    let config: RankerConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RankerConfig::default();
        assert!(config.validate().is_ok());
        assert!(matches!(config.extraction_mode(), Ok(ExtractionMode::Auto)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RankerConfig = toml::from_str("all = true\nhack_percent = 25.0\n").unwrap();
        assert!(config.all);
        assert!(!config.silent);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        match config.extraction_mode().unwrap() {
            ExtractionMode::Explicit(f) => assert!((f.get() - 0.25).abs() < 1e-12),
            other => panic!("expected explicit mode, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_percent_fails_validation() {
        let config = RankerConfig {
            hack_percent: Some(150.0),
            ..RankerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RankerError::InvalidHackPercent(p)) if p == 150.0
        ));
    }

    #[test]
    fn test_empty_output_rejected() {
        let config = RankerConfig {
            output: PathBuf::new(),
            ..RankerConfig::default()
        };
        assert!(matches!(config.validate(), Err(RankerError::InvalidConfig(_))));
    }
}
