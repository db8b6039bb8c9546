//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during claim extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Input text is empty or whitespace-only
    #[error("Input text is empty")]
    EmptyText,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// A lexicon pattern failed to compile
    #[error("Invalid lexicon pattern: {0}")]
    InvalidPattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::InvalidPattern(e.to_string())
    }
}
