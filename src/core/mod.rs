pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, RankerConfig};
pub use error::{RankerError, Result};
pub use types::{SkillLevel, TargetId};
