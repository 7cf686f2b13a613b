//! Validation error types

use std::fmt;

/// Validation error for domain values and request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., UUID)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },

    /// Value must be unique within a collection
    Duplicate { field: &'static str, value: String },

    /// Value refers to a record that does not exist
    UnknownReference { field: &'static str, value: String },

    /// Numeric value below zero
    Negative { field: &'static str, value: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::Duplicate { field, value } => {
                write!(f, "duplicate {} '{}'", field, value)
            }
            Self::UnknownReference { field, value } => {
                write!(f, "{} '{}' does not exist", field, value)
            }
            Self::Negative { field, value } => {
                write!(f, "{} must not be negative (got {})", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
