//! Error types for the analysis engine

use thiserror::Error;
use verity_detector::DetectorError;
use verity_extractor::ExtractorError;

/// Errors that can occur while running the analysis pipeline
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input was rejected before extraction
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// Detector construction failed
    #[error(transparent)]
    Detector(#[from] DetectorError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Whether this error means the submitted input itself was rejected
    ///
    /// Rejections are the caller's problem (empty or over-length text);
    /// everything else is an engine setup problem.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            EngineError::Extractor(ExtractorError::EmptyText)
                | EngineError::Extractor(ExtractorError::TextTooLong(_, _))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_rejection_classification() {
        assert!(EngineError::from(ExtractorError::EmptyText).is_input_rejection());
        assert!(EngineError::from(ExtractorError::TextTooLong(10, 5)).is_input_rejection());
        assert!(!EngineError::Config("bad".to_string()).is_input_rejection());
    }
}
