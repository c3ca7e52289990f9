//! Order store port.
//!
//! Defines the contract for persisting storefront orders and confirming
//! their payment.
//!
//! # Idempotency
//!
//! `confirm_payment` is the only write the verification flow performs, and
//! browsers retry it freely. Implementations must apply it as an atomic
//! compare-and-set on `status`:
//!
//! - `pending | failed -> paid` is applied
//! - `pending | failed -> failed` is applied
//! - `paid -> anything` is a no-op that returns the current snapshot
//!
//! so the final status is `paid` whenever any confirmation with a `Paid`
//! outcome succeeded, regardless of call order or count.
//!
//! The compare-and-set also covers the gateway order binding: an order
//! linked to a gateway order only accepts confirmations signed for that
//! gateway order, so a valid signature for one checkout cannot pay another.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::OrderId;
use crate::domain::order::{Order, PaymentOutcome};

/// Repository port for order persistence and payment confirmation.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Save a new pending order.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if an order with the same id is stored
    /// - `Database` on persistence failure
    async fn create(&self, order: &Order) -> Result<(), OrderStoreError>;

    /// Find an order by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// Record a payment attempt for `gateway_order_id` and return the
    /// resulting snapshot.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the order does not exist
    /// - `GatewayOrderMismatch` if the order is linked to a different
    ///   gateway order; nothing is written
    /// - `Database` on persistence failure
    async fn confirm_payment(
        &self,
        order_id: &OrderId,
        gateway_order_id: &str,
        gateway_payment_id: &str,
        outcome: PaymentOutcome,
    ) -> Result<Order, OrderStoreError>;
}

/// Errors returned by order store implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderStoreError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Order already exists: {0}")]
    AlreadyExists(OrderId),

    /// The confirmation was signed for another gateway order.
    #[error("Order {order_id} is not linked to gateway order {gateway_order_id}")]
    GatewayOrderMismatch {
        order_id: OrderId,
        gateway_order_id: String,
    },

    #[error("Database error: {0}")]
    Database(String),

    /// A stored row could not be mapped back to an order.
    #[error("Corrupt order record: {0}")]
    Corrupt(String),
}
