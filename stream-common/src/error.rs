//! Outcome type shared by every fallible stream operation.

use thiserror::Error;

/// Result alias used across the stream crates.
pub type Outcome<T> = std::result::Result<T, StreamError>;

/// Why a stream operation could not produce a usable value.
///
/// The messages are deliberately generic: a panicking callback is reported
/// the same way regardless of what it panicked with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A callback produced a null-like element.
    #[error("operation `{operation}` produced an invalid result")]
    InvalidResult { operation: &'static str },

    /// A callback panicked while the element was being forced.
    #[error("runtime exception during operation `{operation}`")]
    RuntimeException { operation: &'static str },

    /// A stream passed as an argument was already failed.
    #[error("argument `{argument}` of `{operation}` is not in a processable state")]
    UnprocessableArgument {
        operation: &'static str,
        argument: &'static str,
    },

    /// Sizes must be strictly positive.
    #[error("size must be positive, got {0}")]
    InvalidSize(i64),

    #[error("invalid stream configuration: {0}")]
    Config(String),

    #[error("console output failed: {0}")]
    Console(String),
}

impl StreamError {
    /// Name of the operation the failure is attributed to, if any.
    #[must_use]
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            StreamError::InvalidResult { operation }
            | StreamError::RuntimeException { operation }
            | StreamError::UnprocessableArgument { operation, .. } => Some(operation),
            StreamError::InvalidSize(_) | StreamError::Config(_) | StreamError::Console(_) => None,
        }
    }
}
