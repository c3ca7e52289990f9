//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at least {min}, got {actual}")]
    BelowMinimum { field: String, min: i64, actual: i64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a below-minimum validation error.
    pub fn below_minimum(field: impl Into<String>, min: i64, actual: i64) -> Self {
        ValidationError::BelowMinimum {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("order_id");
        assert_eq!(format!("{}", err), "Field 'order_id' cannot be empty");
    }

    #[test]
    fn below_minimum_displays_correctly() {
        let err = ValidationError::below_minimum("amount", 1, 0);
        assert_eq!(format!("{}", err), "Field 'amount' must be at least 1, got 0");
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("currency", "expected ISO 4217 code");
        assert_eq!(
            format!("{}", err),
            "Field 'currency' has invalid format: expected ISO 4217 code"
        );
    }

    #[test]
    fn field_returns_offending_field_name() {
        assert_eq!(ValidationError::empty_field("a").field(), "a");
        assert_eq!(ValidationError::below_minimum("b", 1, 0).field(), "b");
        assert_eq!(ValidationError::invalid_format("c", "x").field(), "c");
    }
}
