//! Ordering and persistence of ranked targets
//!
//! Downstream schedulers read the gain-ordered list as
//! `[{"hostname", "gainRate", "expRate"}, ...]`.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

use crate::core::error::Result;
use crate::core::types::TargetId;
use crate::ranking::evaluator::TargetRating;

/// Number of entries in the exp ranking
pub const TOP_EXP_COUNT: usize = 5;

/// The persisted view of a rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecord {
    #[serde(rename = "hostname")]
    pub id: TargetId,
    pub gain_rate: f64,
    pub exp_rate: f64,
}

impl From<&TargetRating> for RankedRecord {
    fn from(rating: &TargetRating) -> Self {
        Self {
            id: rating.id.clone(),
            gain_rate: rating.gain_rate,
            exp_rate: rating.exp_rate,
        }
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    OrderedFloat(b).cmp(&OrderedFloat(a))
}

/// New list ordered by gain rate, highest first; ties by id
pub fn sort_by_gain(ratings: &[TargetRating]) -> Vec<TargetRating> {
    let mut ordered = ratings.to_vec();
    ordered.sort_by(|a, b| descending(a.gain_rate, b.gain_rate).then_with(|| a.id.cmp(&b.id)));
    ordered
}

/// Best `limit` ratings by exp rate, highest first; ties by id
pub fn top_by_exp(ratings: &[TargetRating], limit: usize) -> Vec<TargetRating> {
    let mut ordered = ratings.to_vec();
    ordered.sort_by(|a, b| descending(a.exp_rate, b.exp_rate).then_with(|| a.id.cmp(&b.id)));
    ordered.truncate(limit);
    ordered
}

/// Consumer of the final ranking
pub trait RecordSink {
    fn write_records(&mut self, records: &[RankedRecord]) -> Result<()>;
}

impl RecordSink for Vec<RankedRecord> {
    fn write_records(&mut self, records: &[RankedRecord]) -> Result<()> {
        self.clear();
        self.extend_from_slice(records);
        Ok(())
    }
}

/// Writes records as pretty-printed JSON, creating parent directories
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    pub path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for JsonFileSink {
    fn write_records(&mut self, records: &[RankedRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        tracing::info!("Wrote {} ranked targets to {}", records.len(), self.path.display());
        Ok(())
    }
}
