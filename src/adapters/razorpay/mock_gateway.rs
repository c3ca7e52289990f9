//! Mock payment gateway for testing and local development.
//!
//! Issues sequential `order_mock_<n>` ids, records every request and
//! supports error injection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{GatewayError, GatewayOrder, GatewayOrderRequest, PaymentGateway};

#[derive(Debug, Default)]
struct MockState {
    next_sequence: u64,
    error: Option<GatewayError>,
    requests: Vec<GatewayOrderRequest>,
}

/// Mock payment gateway.
///
/// ```ignore
/// let gateway = MockPaymentGateway::new();
/// gateway.set_error(GatewayError::Network("down".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `error`.
    pub fn set_error(&self, error: GatewayError) {
        if let Ok(mut state) = self.inner.lock() {
            state.error = Some(error);
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<GatewayOrderRequest> {
        self.inner
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, request: GatewayOrderRequest) -> Result<GatewayOrder, GatewayError> {
        let mut state = self
            .inner
            .lock()
            .map_err(|_| GatewayError::InvalidResponse("mock state poisoned".to_string()))?;

        state.requests.push(request.clone());
        if let Some(error) = &state.error {
            return Err(error.clone());
        }

        state.next_sequence += 1;
        Ok(GatewayOrder {
            id: format!("order_mock_{}", state.next_sequence),
            amount: request.amount,
            currency: request.currency,
            receipt: Some(request.receipt),
            status: "created".to_string(),
        })
    }
}
