//! Error types for the paragraph detection engine.
//!
//! This module defines all error types that can occur during threshold
//! estimation and pipeline configuration.

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during paragraph detection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No line passed the confidence/non-blank filter during threshold
    /// estimation. Recovered internally by falling back to default
    /// thresholds; never fatal to the pipeline.
    #[error("Insufficient data for threshold estimation: {reason}")]
    InsufficientData {
        /// Why estimation could not proceed
        reason: String,
    },

    /// Configuration rejected during validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
