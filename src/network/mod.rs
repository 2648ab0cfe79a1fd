//! Network model: targets, the actor, and the scan that produces them

pub mod actor;
pub mod capacity;
pub mod scan;
pub mod target;

pub use actor::{Actor, ActorMultipliers};
pub use capacity::total_capacity;
pub use scan::{parse_snapshot, NetworkSnapshot, SnapshotFile, SnapshotFormat, TargetSource};
pub use target::{NodeCategory, Target, TargetConditions};
