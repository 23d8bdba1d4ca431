//! Error types for loading and spinning

use thiserror::Error;

/// Static data or tuning that leaves the wheel unusable
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Wheel has no segments")]
    NoSegments,
    #[error("No segment is marked as the good-luck segment")]
    NoTerminalSegment,
    #[error("{count} segments are marked as the good-luck segment, expected exactly one")]
    MultipleTerminalSegments { count: usize },
    #[error("Roast table has no \"general\" entries")]
    MissingGeneralRoasts,
    #[error("Toast list is empty")]
    NoToasts,
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),
}

#[derive(Error, Debug)]
pub enum WheelError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("No segment qualifies as a decoy")]
    NoDecoyAvailable,
    #[error("Segment {0} cannot be used as a decoy")]
    IneligibleDecoy(usize),
    #[error("Data error: {0}")]
    Data(#[from] serde_json::Error),
}
