//! Error types for device parameters and selectors.

use thiserror::Error;

/// Errors raised while building or validating device parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A length or width selector name was not recognized.
    #[error("Invalid {kind} selector '{value}' (expected {expected})")]
    InvalidSelector {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A process or bias parameter is outside its valid domain.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Result type for device operations.
pub type Result<T> = std::result::Result<T, Error>;
