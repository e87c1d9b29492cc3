//! Error types for the extractor.
//!
//! One `ExtractorError` enum for library consumers, with `#[from]`
//! conversions for the underlying IO, parse, and serialization errors.

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// IO error (input unreadable or output unwritable).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Markup parsing failed.
    #[error("SVG parsing failed: {0}")]
    Parse(#[from] roxmltree::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
