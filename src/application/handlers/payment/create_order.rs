//! CreateOrderHandler - Command handler for opening a checkout with the gateway.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::order::{NewOrder, Order};
use crate::ports::{GatewayOrderRequest, OrderStore, PaymentGateway};

use super::errors::OrderError;

/// Command to create a payable order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub order_id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: Option<String>,
}

/// Handler for creating orders.
///
/// Validates the input, asks the gateway for an order to pay against, then
/// records the pending order locally. A gateway failure leaves the store
/// untouched.
pub struct CreateOrderHandler {
    order_store: Arc<dyn OrderStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateOrderHandler {
    pub fn new(order_store: Arc<dyn OrderStore>, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            order_store,
            gateway,
        }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<Order, OrderError> {
        let new_order = NewOrder::new(cmd.order_id, cmd.amount, cmd.currency)?;

        if self.order_store.find_by_id(&new_order.order_id).await?.is_some() {
            return Err(OrderError::AlreadyExists(new_order.order_id));
        }

        let gateway_order = self
            .gateway
            .create_order(GatewayOrderRequest {
                amount: new_order.amount,
                currency: new_order.currency.clone(),
                receipt: new_order.order_id.to_string(),
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    order_id = %new_order.order_id,
                    error = %e,
                    retryable = e.is_retryable(),
                    "Gateway order creation failed"
                );
                OrderError::Gateway(e)
            })?;

        let order = Order::create(new_order, Some(gateway_order.id), Timestamp::now());
        self.order_store.create(&order).await?;

        tracing::info!(
            order_id = %order.order_id,
            amount = order.amount,
            currency = %order.currency,
            "Order created"
        );

        Ok(order)
    }
}
