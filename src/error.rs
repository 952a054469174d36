use std::io;
use thiserror::Error;

/// Custom error type for govctl
#[derive(Error, Debug)]
pub enum GovError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid governor: {0}")]
    InvalidGovernor(String),

    #[error("Elevation failed: {0}")]
    ElevationFailed(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for govctl
pub type Result<T> = std::result::Result<T, GovError>;

impl GovError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GovError::Config(msg.into())
    }

    /// Create an invalid governor error
    pub fn invalid_governor<S: Into<String>>(msg: S) -> Self {
        GovError::InvalidGovernor(msg.into())
    }

    /// Create an elevation failure error
    pub fn elevation_failed<S: Into<String>>(msg: S) -> Self {
        GovError::ElevationFailed(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GovError::Other(msg.into())
    }
}
