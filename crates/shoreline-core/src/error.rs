//! Analysis error types

use thiserror::Error;

/// Errors raised inside the text analysis pipeline.
///
/// Unknown severity or hazard labels are not errors; they fall back to the
/// default prior (see [`crate::assess::priors`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The polarity capability failed on the input text
    #[error("nlp capability failed: {0}")]
    Nlp(String),

    /// The request could not be understood
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised when image bytes cannot be turned into a pixel grid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImageDecodeError {
    /// No bytes were supplied
    #[error("image payload is empty")]
    Empty,

    /// Payload exceeds the configured size limit
    #[error("image payload too large: {size} bytes exceeds limit of {limit}")]
    TooLarge { size: usize, limit: usize },

    /// Format could not be recognised
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Format was recognised but decoding failed
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// Decoder reported a zero-sized image
    #[error("image has zero width or height")]
    ZeroDimensions,
}
