//! Error types for the fiction engine.

use scribe_core::CoreError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that prevent a session from starting.
///
/// Nothing the player types produces one of these; player mistakes are
/// reported through [`crate::Outcome`].
#[derive(Debug, Error)]
pub enum FictionError {
    /// The world definition is unusable.
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    /// The configured start location does not exist.
    #[error("location not found: {0}")]
    LocationNotFound(String),
}
