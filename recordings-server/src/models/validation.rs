//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't parse as the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded
    Body { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "invalid {}: {}", field, reason),
            Self::Body { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
