//! Error types for configuration and event handling.

use thiserror::Error;

/// Errors from session setup and input parsing.
///
/// Event handling itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid device or process parameter.
    #[error("Device error: {0}")]
    Device(#[from] mosview_devices::Error),

    /// Configuration is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An event line could not be parsed.
    #[error("Invalid event '{line}': {reason}")]
    InvalidEvent { line: String, reason: String },

    /// I/O error while reading configuration or scripts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, Error>;
