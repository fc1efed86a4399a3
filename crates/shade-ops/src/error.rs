//! Error types for buffer-level operations.

use thiserror::Error;

/// Error type for buffer-level operations.
///
/// Per-pixel math never fails; these cover only buffer shape problems.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Buffer length is not a whole number of pixels.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for buffer-level operations.
pub type OpsResult<T> = Result<T, OpsError>;
