//! Error types for payment and order handlers.

use thiserror::Error;

use crate::domain::foundation::{OrderId, ValidationError};
use crate::ports::{GatewayError, OrderStoreError};

/// Errors from the payment verification handshake.
///
/// A signature mismatch is not an error: it is reported as a
/// [`VerificationOutcome::Rejected`](crate::domain::payment::VerificationOutcome) result.
#[derive(Debug, Error)]
pub enum PaymentVerificationError {
    /// A required request field is absent or empty.
    #[error("Missing required fields: {0}")]
    MissingFields(#[from] ValidationError),

    /// The order store has no order with this id.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The order store failed while confirming payment.
    #[error("Order store failure: {0}")]
    Store(OrderStoreError),
}

impl PaymentVerificationError {
    /// Client-facing message. Store details stay in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            PaymentVerificationError::MissingFields(_) => "Missing required fields",
            PaymentVerificationError::OrderNotFound(_) => "Order not found",
            PaymentVerificationError::Store(_) => "Payment verification failed",
        }
    }
}

impl From<OrderStoreError> for PaymentVerificationError {
    fn from(err: OrderStoreError) -> Self {
        match err {
            OrderStoreError::NotFound(id) => PaymentVerificationError::OrderNotFound(id),
            other => PaymentVerificationError::Store(other),
        }
    }
}

/// Errors from order creation and lookup.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid order: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Order already exists: {0}")]
    AlreadyExists(OrderId),

    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Order store error: {0}")]
    Store(OrderStoreError),
}

impl OrderError {
    /// Client-facing message. Infrastructure details stay in the logs.
    pub fn message(&self) -> String {
        match self {
            OrderError::Invalid(e) => e.to_string(),
            OrderError::AlreadyExists(_) => "Order already exists".to_string(),
            OrderError::NotFound(_) => "Order not found".to_string(),
            OrderError::Gateway(_) => "Payment gateway unavailable".to_string(),
            OrderError::Store(_) => "Internal server error".to_string(),
        }
    }
}

impl From<OrderStoreError> for OrderError {
    fn from(err: OrderStoreError) -> Self {
        match err {
            OrderStoreError::NotFound(id) => OrderError::NotFound(id),
            OrderStoreError::AlreadyExists(id) => OrderError::AlreadyExists(id),
            other => OrderError::Store(other),
        }
    }
}
