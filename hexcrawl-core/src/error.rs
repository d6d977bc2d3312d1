//! Error types for the hexcrawl core

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in core computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Hex size must be finite and positive; no clamping
    #[error("invalid hex size {0}: must be finite and greater than zero")]
    InvalidHexSize(f64),

    /// Ring counts are persisted as stringified integers
    #[error("invalid ring count {0:?}: must be a non-negative integer")]
    InvalidRingCount(String),

    /// Content record failed boundary validation
    #[error("invalid content: {0}")]
    InvalidContent(String),

    /// Layout invariant: ring 0 always contributes the "0" hex
    #[error("layout has no center hex \"0\"")]
    CenterMissing,
}
