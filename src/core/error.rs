use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("hack percent must lie strictly between 0 and 100, got {0}")]
    InvalidHackPercent(f64),

    #[error("no reachable target to use as an extrapolation reference ({locked} locked targets pending)")]
    NoReference { locked: usize },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RankerError>;
