//! Verification request and result value objects.

use serde::Serialize;

use crate::domain::foundation::{OrderId, ValidationError};

/// A fully populated payment verification request.
///
/// Only constructible through [`VerificationRequest::from_fields`], so every
/// field is known to be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub order_id: OrderId,
    pub gateway_order_id: String,
    pub gateway_payment_id: String,
    pub gateway_signature: String,
}

impl VerificationRequest {
    /// Builds a request from optional raw fields.
    ///
    /// # Errors
    ///
    /// `ValidationError::EmptyField` naming the first field that is absent
    /// or empty.
    pub fn from_fields(
        order_id: Option<String>,
        gateway_order_id: Option<String>,
        gateway_payment_id: Option<String>,
        gateway_signature: Option<String>,
    ) -> Result<Self, ValidationError> {
        let order_id = required("order_id", order_id)?;
        let gateway_order_id = required("gateway_order_id", gateway_order_id)?;
        let gateway_payment_id = required("gateway_payment_id", gateway_payment_id)?;
        let gateway_signature = required("gateway_signature", gateway_signature)?;

        Ok(Self {
            order_id: OrderId::new(order_id)?,
            gateway_order_id,
            gateway_payment_id,
            gateway_signature,
        })
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::empty_field(field)),
    }
}

/// Outcome of a verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Signature matched and the order is now paid.
    Verified,
    /// Signature did not match; the order was left untouched.
    Rejected,
}

/// Result of handling one verification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub order_id: OrderId,
    pub outcome: VerificationOutcome,
}

impl VerificationResult {
    pub fn verified(order_id: OrderId) -> Self {
        Self {
            order_id,
            outcome: VerificationOutcome::Verified,
        }
    }

    pub fn rejected(order_id: OrderId) -> Self {
        Self {
            order_id,
            outcome: VerificationOutcome::Rejected,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.outcome == VerificationOutcome::Verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn from_fields_accepts_complete_request() {
        let request = VerificationRequest::from_fields(
            some("ord_1"),
            some("order_ABC"),
            some("pay_XYZ"),
            some("deadbeef"),
        )
        .unwrap();

        assert_eq!(request.order_id.as_str(), "ord_1");
        assert_eq!(request.gateway_order_id, "order_ABC");
        assert_eq!(request.gateway_payment_id, "pay_XYZ");
        assert_eq!(request.gateway_signature, "deadbeef");
    }

    #[test]
    fn from_fields_rejects_missing_signature() {
        let result =
            VerificationRequest::from_fields(some("ord_1"), some("order_ABC"), some("pay_XYZ"), None);

        assert_eq!(result.unwrap_err(), ValidationError::empty_field("gateway_signature"));
    }

    #[test]
    fn from_fields_rejects_empty_strings() {
        let result =
            VerificationRequest::from_fields(some("ord_1"), some(""), some("pay_XYZ"), some("sig"));

        assert_eq!(result.unwrap_err(), ValidationError::empty_field("gateway_order_id"));
    }

    #[test]
    fn from_fields_reports_first_missing_field() {
        let result = VerificationRequest::from_fields(None, None, None, None);

        assert_eq!(result.unwrap_err().field(), "order_id");
    }

    #[test]
    fn from_fields_rejects_blank_order_id() {
        let result =
            VerificationRequest::from_fields(some("  "), some("order_ABC"), some("pay"), some("sig"));

        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn result_constructors_set_outcome() {
        let id = OrderId::new("ord_1").unwrap();
        assert!(VerificationResult::verified(id.clone()).is_verified());
        assert!(!VerificationResult::rejected(id).is_verified());
    }
}
