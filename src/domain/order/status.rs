//! OrderStatus and PaymentOutcome enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Payment status of a storefront order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl OrderStatus {
    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Failed => "failed",
        }
    }

    /// Parses the storage representation.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "failed" => Ok(OrderStatus::Failed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown order status '{}'", other),
            )),
        }
    }
}

impl StateMachine for OrderStatus {
    /// Valid transitions:
    /// - Pending -> Paid | Failed
    /// - Failed -> Paid | Failed (the shopper retried and the attempt failed again)
    /// - Paid is terminal
    fn can_transition_to(&self, target: &Self) -> bool {
        use OrderStatus::*;
        matches!(
            (self, target),
            (Pending, Paid) | (Pending, Failed) | (Failed, Paid) | (Failed, Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OrderStatus::*;
        match self {
            Pending => vec![Paid, Failed],
            Failed => vec![Paid, Failed],
            Paid => vec![],
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome reported for a payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    Paid,
    Failed,
}

impl PaymentOutcome {
    /// The order status this outcome moves an order into.
    pub fn target_status(&self) -> OrderStatus {
        match self {
            PaymentOutcome::Paid => OrderStatus::Paid,
            PaymentOutcome::Failed => OrderStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn pending_can_become_paid_or_failed() {
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Paid));
        assert!(OrderStatus::Pending.can_transition_to(&OrderStatus::Failed));
    }

    #[test]
    fn failed_can_be_retried() {
        assert!(OrderStatus::Failed.can_transition_to(&OrderStatus::Paid));
        assert!(OrderStatus::Failed.can_transition_to(&OrderStatus::Failed));
    }

    #[test]
    fn paid_is_terminal() {
        assert!(OrderStatus::Paid.is_terminal());
        assert!(!OrderStatus::Paid.can_transition_to(&OrderStatus::Failed));
        assert!(!OrderStatus::Paid.can_transition_to(&OrderStatus::Pending));
        assert!(!OrderStatus::Paid.can_transition_to(&OrderStatus::Paid));
    }

    #[test]
    fn nothing_returns_to_pending() {
        assert!(!OrderStatus::Failed.can_transition_to(&OrderStatus::Pending));
        assert!(!OrderStatus::Pending.can_transition_to(&OrderStatus::Pending));
    }

    #[test]
    fn parse_round_trips_storage_form() {
        for status in [OrderStatus::Pending, OrderStatus::Paid, OrderStatus::Failed] {
            assert_eq!(OrderStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(OrderStatus::parse("refunded").is_err());
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&OrderStatus::Paid).unwrap(), "\"paid\"");
    }

    #[test]
    fn outcome_maps_to_target_status() {
        assert_eq!(PaymentOutcome::Paid.target_status(), OrderStatus::Paid);
        assert_eq!(PaymentOutcome::Failed.target_status(), OrderStatus::Failed);
    }
}
