//! Error types for locale operations.
//!
//! These correspond to the error conditions of the `Intl.Locale` surface:
//! malformed language tags raise a range error, wrong argument shapes a
//! type error.

use std::fmt;

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq)]
pub struct IntlError {
    /// The error message
    pub message: String,
}

impl IntlError {
    /// Create a new generic error
    pub fn new(message: impl Into<String>) -> Self {
        IntlError {
            message: message.into(),
        }
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        IntlError::new(format!("RangeError: {}", message.into()))
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        IntlError::new(format!("TypeError: {}", message.into()))
    }
}

impl fmt::Display for IntlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for IntlError {}

/// Result type for locale operations
pub type IntlResult<T> = Result<T, IntlError>;
