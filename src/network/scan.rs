//! Network snapshots produced by an external scanner
//!
//! A snapshot holds the actor and every node the scanner found. Snapshots are
//! stored as JSON or TOML; the format is picked from the file extension.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{RankerError, Result};
use crate::network::actor::Actor;
use crate::network::target::Target;

/// Everything known about the network for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    pub actor: Actor,
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl NetworkSnapshot {
    pub fn new(actor: Actor, targets: Vec<Target>) -> Self {
        Self { actor, targets }
    }

    /// Reject duplicate ids and nonsensical numbers
    pub fn validate(&self) -> Result<()> {
        let mut seen = AHashSet::with_capacity(self.targets.len());
        for target in &self.targets {
            if !seen.insert(target.id.as_str()) {
                return Err(RankerError::InvalidSnapshot(format!(
                    "duplicate target id '{}'",
                    target.id
                )));
            }
            if !target.max_money.is_finite() || target.max_money < 0.0 {
                return Err(RankerError::InvalidSnapshot(format!(
                    "target '{}' has invalid max_money {}",
                    target.id, target.max_money
                )));
            }
            if !target.min_difficulty.is_finite() || target.min_difficulty < 0.0 {
                return Err(RankerError::InvalidSnapshot(format!(
                    "target '{}' has invalid min_difficulty {}",
                    target.id, target.min_difficulty
                )));
            }
        }
        Ok(())
    }
}

/// Source of the initial target list
pub trait TargetSource {
    fn scan(&self) -> Result<NetworkSnapshot>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SnapshotFormat::Toml,
            _ => SnapshotFormat::Json,
        }
    }
}

/// Parse and validate snapshot text
pub fn parse_snapshot(contents: &str, format: SnapshotFormat) -> Result<NetworkSnapshot> {
    let snapshot: NetworkSnapshot = match format {
        SnapshotFormat::Json => serde_json::from_str(contents)?,
        SnapshotFormat::Toml => toml::from_str(contents)?,
    };
    snapshot.validate()?;
    Ok(snapshot)
}

/// Snapshot stored on disk
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    pub path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TargetSource for SnapshotFile {
    fn scan(&self) -> Result<NetworkSnapshot> {
        let contents = fs::read_to_string(&self.path)?;
        let snapshot = parse_snapshot(&contents, SnapshotFormat::from_path(&self.path))?;
        tracing::info!(
            "Loaded {} targets from {} (skill {})",
            snapshot.targets.len(),
            self.path.display(),
            snapshot.actor.skill
        );
        Ok(snapshot)
    }
}
