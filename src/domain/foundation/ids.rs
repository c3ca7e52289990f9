//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Storefront order identifier.
///
/// Assigned by the storefront when the order is placed and never changed
/// afterwards. Opaque to this service apart from being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new OrderId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("order_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_accepts_non_empty_string() {
        let id = OrderId::new("ord_123").unwrap();
        assert_eq!(id.as_str(), "ord_123");
    }

    #[test]
    fn order_id_rejects_empty_string() {
        let result = OrderId::new("");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "order_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn order_id_rejects_whitespace() {
        assert!(OrderId::new("   ").is_err());
    }

    #[test]
    fn order_id_displays_correctly() {
        let id = OrderId::new("ord_456").unwrap();
        assert_eq!(format!("{}", id), "ord_456");
    }

    #[test]
    fn order_id_serializes_transparently() {
        let id = OrderId::new("ord_789").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ord_789\"");
    }
}
