//! In-Memory Order Store Adapter
//!
//! Keeps orders in a process-local map. Used by tests and by the `memory`
//! storage backend for local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{OrderId, Timestamp};
use crate::domain::order::{Order, PaymentOutcome};
use crate::ports::{OrderStore, OrderStoreError};

/// In-memory storage for orders.
///
/// `confirm_payment` runs its read-check-write under one write lock, which
/// is what makes concurrent confirmations atomic.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with orders (useful for tests)
    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let map = orders
            .into_iter()
            .map(|order| (order.order_id.clone(), order))
            .collect();
        Self {
            orders: Arc::new(RwLock::new(map)),
        }
    }

    /// Get the number of stored orders
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: &Order) -> Result<(), OrderStoreError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.order_id) {
            return Err(OrderStoreError::AlreadyExists(order.order_id.clone()));
        }
        orders.insert(order.order_id.clone(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
        Ok(self.orders.read().await.get(order_id).cloned())
    }

    async fn confirm_payment(
        &self,
        order_id: &OrderId,
        gateway_order_id: &str,
        gateway_payment_id: &str,
        outcome: PaymentOutcome,
    ) -> Result<Order, OrderStoreError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| OrderStoreError::NotFound(order_id.clone()))?;

        if !order.accepts_gateway_order(gateway_order_id) {
            return Err(OrderStoreError::GatewayOrderMismatch {
                order_id: order_id.clone(),
                gateway_order_id: gateway_order_id.to_string(),
            });
        }

        if !order.apply_payment(gateway_payment_id, outcome, Timestamp::now()) {
            tracing::debug!(
                order_id = %order_id,
                status = %order.status,
                "Order already paid, confirmation ignored"
            );
        }

        Ok(order.clone())
    }
}
