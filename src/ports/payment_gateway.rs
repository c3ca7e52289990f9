//! Payment gateway port.
//!
//! The storefront opens checkout against a gateway-side order. This port
//! creates that order; the gateway later signs the resulting payment, which
//! the verification flow checks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a gateway order for the given amount.
    async fn create_order(&self, request: GatewayOrderRequest) -> Result<GatewayOrder, GatewayError>;
}

/// Request to create a gateway order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayOrderRequest {
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    /// Merchant reference; the storefront order id.
    pub receipt: String,
}

/// Gateway order as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: String,
}

/// Errors from payment gateway calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Gateway rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Network(_) => true,
            GatewayError::Api { status, .. } => *status == 429 || *status >= 500,
            GatewayError::InvalidResponse(_) => false,
        }
    }
}
