//! Error types for the detector

use thiserror::Error;

/// Errors that can occur while constructing a detector
#[derive(Error, Debug)]
pub enum DetectorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An internal pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

impl From<regex::Error> for DetectorError {
    fn from(e: regex::Error) -> Self {
        DetectorError::InvalidPattern(e.to_string())
    }
}
