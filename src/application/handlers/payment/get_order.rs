//! GetOrderHandler - Query handler for an order's payment state.

use std::sync::Arc;

use crate::domain::foundation::OrderId;
use crate::domain::order::Order;
use crate::ports::OrderStore;

use super::errors::OrderError;

/// Query to get one order.
#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    pub order_id: String,
}

/// Handler for reading order payment state.
pub struct GetOrderHandler {
    order_store: Arc<dyn OrderStore>,
}

impl GetOrderHandler {
    pub fn new(order_store: Arc<dyn OrderStore>) -> Self {
        Self { order_store }
    }

    pub async fn handle(&self, query: GetOrderQuery) -> Result<Order, OrderError> {
        let order_id = OrderId::new(query.order_id)?;

        self.order_store
            .find_by_id(&order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryOrderStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::order::{NewOrder, OrderStatus};

    fn query(id: &str) -> GetOrderQuery {
        GetOrderQuery {
            order_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_stored_order() {
        let order = Order::create(
            NewOrder::new("ord_1", 2_500, Some("usd".to_string())).unwrap(),
            None,
            Timestamp::now(),
        );
        let handler = GetOrderHandler::new(Arc::new(InMemoryOrderStore::with_orders([order])));

        let found = handler.handle(query("ord_1")).await.unwrap();

        assert_eq!(found.status, OrderStatus::Pending);
        assert_eq!(found.currency, "USD");
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let handler = GetOrderHandler::new(Arc::new(InMemoryOrderStore::new()));

        let result = handler.handle(query("ord_missing")).await;

        assert!(matches!(result, Err(OrderError::NotFound(_))));
    }

    #[tokio::test]
    async fn blank_id_is_invalid() {
        let handler = GetOrderHandler::new(Arc::new(InMemoryOrderStore::new()));

        let result = handler.handle(query("   ")).await;

        assert!(matches!(result, Err(OrderError::Invalid(_))));
    }
}
