//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in host-side plumbing (settings I/O and parsing).
///
/// Form validation and service failures have their own types, see
/// [`crate::form::ValidationError`] and [`crate::form::SubmitError`].
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
