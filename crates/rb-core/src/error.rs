//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("angle must be finite, got {0}")]
    NonFiniteAngle(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
