//! HTTP DTOs for payment endpoints.
//!
//! Field names are camelCase to match what the storefront checkout script
//! already sends.

use serde::{Deserialize, Serialize};

use crate::domain::order::Order;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to verify a completed gateway payment.
///
/// Every field is optional so a missing key or `null` reaches the
/// application layer and is reported as a missing field, not a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub gateway_order_id: Option<String>,
    #[serde(default)]
    pub gateway_payment_id: Option<String>,
    #[serde(default)]
    pub gateway_signature: Option<String>,
}

/// Request to open a payable order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    #[serde(default)]
    pub currency: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of a successful verification.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Checkout parameters handed to the browser after order creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub gateway_order_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    /// Public gateway key id the checkout widget needs.
    pub key_id: String,
}

impl CreateOrderResponse {
    pub fn new(order: &Order, key_id: impl Into<String>) -> Self {
        Self {
            order_id: order.order_id.to_string(),
            gateway_order_id: order.gateway_order_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            key_id: key_id.into(),
        }
    }
}

/// Order payment state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub status: String,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub created_at: String,
    pub updated_at: String,
    pub paid_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id.to_string(),
            status: order.status.as_str().to_string(),
            gateway_order_id: order.gateway_order_id,
            gateway_payment_id: order.gateway_payment_id,
            amount: order.amount,
            currency: order.currency,
            created_at: order.created_at.as_datetime().to_rfc3339(),
            updated_at: order.updated_at.as_datetime().to_rfc3339(),
            paid_at: order.paid_at.map(|t| t.as_datetime().to_rfc3339()),
        }
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::order::{NewOrder, PaymentOutcome};

    #[test]
    fn verify_request_reads_camel_case() {
        let json = r#"{"orderId":"ord_1","gatewayOrderId":"order_A","gatewayPaymentId":"pay_B","gatewaySignature":"abc"}"#;
        let request: VerifyPaymentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.order_id.as_deref(), Some("ord_1"));
        assert_eq!(request.gateway_signature.as_deref(), Some("abc"));
    }

    #[test]
    fn verify_request_treats_null_and_missing_as_absent() {
        let json = r#"{"orderId":"ord_1","gatewayOrderId":null}"#;
        let request: VerifyPaymentRequest = serde_json::from_str(json).unwrap();
        assert!(request.gateway_order_id.is_none());
        assert!(request.gateway_payment_id.is_none());
    }

    #[test]
    fn create_order_request_currency_is_optional() {
        let json = r#"{"orderId":"ord_1","amount":49900}"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, 49_900);
        assert!(request.currency.is_none());
    }

    #[test]
    fn success_response_shape() {
        let json = serde_json::to_value(SuccessResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new("Invalid signature")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Invalid signature"}));
    }

    #[test]
    fn order_response_serializes_paid_order() {
        let mut order = Order::create(
            NewOrder::new("ord_1", 49_900, None).unwrap(),
            Some("order_A".to_string()),
            Timestamp::now(),
        );
        order.apply_payment("pay_B", PaymentOutcome::Paid, Timestamp::now());

        let json = serde_json::to_value(OrderResponse::from(order)).unwrap();

        assert_eq!(json["orderId"], "ord_1");
        assert_eq!(json["status"], "paid");
        assert_eq!(json["gatewayPaymentId"], "pay_B");
        assert!(json["paidAt"].is_string());
    }

    #[test]
    fn create_order_response_includes_key_id() {
        let order = Order::create(
            NewOrder::new("ord_1", 100, None).unwrap(),
            Some("order_A".to_string()),
            Timestamp::now(),
        );

        let json = serde_json::to_value(CreateOrderResponse::new(&order, "rzp_test_key")).unwrap();

        assert_eq!(json["keyId"], "rzp_test_key");
        assert_eq!(json["gatewayOrderId"], "order_A");
        assert_eq!(json["currency"], "INR");
    }
}
