//! PostgreSQL implementation of OrderStore.
//!
//! Payment confirmation is a single conditional `UPDATE`, so concurrent
//! confirmations for the same order serialize on the row lock and a paid
//! row is never rewritten.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{OrderId, Timestamp};
use crate::domain::order::{Order, OrderStatus, PaymentOutcome};
use crate::ports::{OrderStore, OrderStoreError};

const ORDER_COLUMNS: &str = "order_id, status, gateway_order_id, gateway_payment_id, \
                             amount, currency, created_at, updated_at, paid_at";

/// PostgreSQL implementation of the OrderStore port.
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgresOrderStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an order.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    order_id: String,
    status: String,
    gateway_order_id: Option<String>,
    gateway_payment_id: Option<String>,
    amount: i64,
    currency: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    paid_at: Option<DateTime<Utc>>,
}

impl TryFrom<OrderRow> for Order {
    type Error = OrderStoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let order_id = OrderId::new(row.order_id)
            .map_err(|e| OrderStoreError::Corrupt(format!("Invalid order_id: {}", e)))?;
        let status = OrderStatus::parse(&row.status)
            .map_err(|e| OrderStoreError::Corrupt(format!("Order {}: {}", order_id, e)))?;

        Ok(Order {
            order_id,
            status,
            gateway_order_id: row.gateway_order_id,
            gateway_payment_id: row.gateway_payment_id,
            amount: row.amount,
            currency: row.currency,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
            paid_at: row.paid_at.map(Timestamp::from_datetime),
        })
    }
}

fn database_error(context: &str, err: sqlx::Error) -> OrderStoreError {
    OrderStoreError::Database(format!("{}: {}", context, err))
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn create(&self, order: &Order) -> Result<(), OrderStoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                order_id, status, gateway_order_id, gateway_payment_id,
                amount, currency, created_at, updated_at, paid_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (order_id) DO NOTHING
            "#,
        )
        .bind(order.order_id.as_str())
        .bind(order.status.as_str())
        .bind(&order.gateway_order_id)
        .bind(&order.gateway_payment_id)
        .bind(order.amount)
        .bind(&order.currency)
        .bind(order.created_at.as_datetime())
        .bind(order.updated_at.as_datetime())
        .bind(order.paid_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Failed to save order", e))?;

        if result.rows_affected() == 0 {
            return Err(OrderStoreError::AlreadyExists(order.order_id.clone()));
        }
        Ok(())
    }

    async fn find_by_id(&self, order_id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "SELECT {} FROM orders WHERE order_id = $1",
            ORDER_COLUMNS
        ))
        .bind(order_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Failed to find order", e))?;

        row.map(Order::try_from).transpose()
    }

    async fn confirm_payment(
        &self,
        order_id: &OrderId,
        gateway_order_id: &str,
        gateway_payment_id: &str,
        outcome: PaymentOutcome,
    ) -> Result<Order, OrderStoreError> {
        let target = outcome.target_status();

        let updated: Option<OrderRow> = sqlx::query_as(&format!(
            r#"
            UPDATE orders SET
                status = $2,
                gateway_payment_id = $3,
                updated_at = $4,
                paid_at = CASE WHEN $2 = 'paid' THEN $4 ELSE paid_at END
            WHERE order_id = $1
              AND status <> 'paid'
              AND (gateway_order_id IS NULL OR gateway_order_id = $5)
            RETURNING {}
            "#,
            ORDER_COLUMNS
        ))
        .bind(order_id.as_str())
        .bind(target.as_str())
        .bind(gateway_payment_id)
        .bind(Utc::now())
        .bind(gateway_order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Failed to confirm payment", e))?;

        if let Some(row) = updated {
            return Order::try_from(row);
        }

        // No row updated: unknown, linked elsewhere, or already paid.
        let order = self
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderStoreError::NotFound(order_id.clone()))?;
        unapplied_outcome(order, gateway_order_id)
    }
}

/// Explains why the conditional update matched no row for an existing order.
fn unapplied_outcome(order: Order, gateway_order_id: &str) -> Result<Order, OrderStoreError> {
    if !order.accepts_gateway_order(gateway_order_id) {
        return Err(OrderStoreError::GatewayOrderMismatch {
            order_id: order.order_id,
            gateway_order_id: gateway_order_id.to_string(),
        });
    }
    if order.is_paid() {
        tracing::debug!(
            order_id = %order.order_id,
            "Order already paid, confirmation ignored"
        );
    } else {
        tracing::warn!(
            order_id = %order.order_id,
            status = %order.status,
            "Confirmation matched no row for an unpaid order"
        );
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> OrderRow {
        let now = Utc::now();
        OrderRow {
            order_id: "ord_1".to_string(),
            status: status.to_string(),
            gateway_order_id: Some("order_ABC".to_string()),
            gateway_payment_id: None,
            amount: 49_900,
            currency: "INR".to_string(),
            created_at: now,
            updated_at: now,
            paid_at: None,
        }
    }

    #[test]
    fn row_converts_to_order() {
        let order = Order::try_from(row("pending")).unwrap();
        assert_eq!(order.order_id.as_str(), "ord_1");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.amount, 49_900);
        assert_eq!(order.gateway_order_id.as_deref(), Some("order_ABC"));
    }

    #[test]
    fn row_status_is_case_insensitive() {
        let order = Order::try_from(row("PAID")).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
    }

    #[test]
    fn row_with_unknown_status_is_corrupt() {
        let result = Order::try_from(row("refunded"));
        assert!(matches!(result, Err(OrderStoreError::Corrupt(_))));
    }

    #[test]
    fn row_with_empty_id_is_corrupt() {
        let mut bad = row("pending");
        bad.order_id = String::new();
        assert!(matches!(Order::try_from(bad), Err(OrderStoreError::Corrupt(_))));
    }

    #[test]
    fn unapplied_confirmation_for_other_gateway_order_is_mismatch() {
        let order = Order::try_from(row("pending")).unwrap();
        assert!(matches!(
            unapplied_outcome(order, "order_OTHER"),
            Err(OrderStoreError::GatewayOrderMismatch { .. })
        ));
    }

    #[test]
    fn unapplied_confirmation_on_paid_order_returns_snapshot() {
        let order = Order::try_from(row("paid")).unwrap();
        let snapshot = unapplied_outcome(order.clone(), "order_ABC").unwrap();
        assert_eq!(snapshot, order);
    }

    #[test]
    fn select_columns_cover_every_row_field() {
        for column in [
            "order_id",
            "status",
            "gateway_order_id",
            "gateway_payment_id",
            "amount",
            "currency",
            "created_at",
            "updated_at",
            "paid_at",
        ] {
            assert!(ORDER_COLUMNS.contains(column), "missing column {}", column);
        }
    }
}
