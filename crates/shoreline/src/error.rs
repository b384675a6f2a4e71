//! Common error types for Shoreline Rust components.

use shoreline_core::{AnalysisError, ImageDecodeError};
use thiserror::Error;

/// Common error type for Shoreline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Text pipeline failure
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    /// Image bytes could not be decoded
    #[error("Image analysis failed: {0}")]
    ImageDecode(#[from] ImageDecodeError),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Whether the caller sent something unusable, as opposed to a failure
    /// inside the pipeline.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Serialization(_))
            || matches!(self, Self::Analysis(AnalysisError::InvalidInput(_)))
    }
}

/// Result type alias using Shoreline Error.
pub type Result<T> = std::result::Result<T, Error>;
