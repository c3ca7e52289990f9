//! Order aggregate entity.
//!
//! An Order tracks the payment state of one storefront checkout. The catalogue
//! and cart side of the order live in the storefront's document store; this
//! service only owns what payment confirmation needs.
//!
//! # Design Decisions
//!
//! - **Money in minor units**: amounts are i64 paise/cents, never floats
//! - **Paid is final**: once paid, later confirmations are no-ops
//! - **Caller-supplied id**: the storefront order id is the primary key

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, StateMachine, Timestamp, ValidationError};

use super::{OrderStatus, PaymentOutcome};

/// Currency used when the storefront does not specify one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Order aggregate. Values handed out by stores are snapshots.
///
/// # Invariants
///
/// - `order_id` never changes
/// - once `status` is `Paid` it never changes again
/// - `paid_at` is set exactly when `status` becomes `Paid`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub status: OrderStatus,

    /// Gateway-side order id issued at checkout creation.
    pub gateway_order_id: Option<String>,

    /// Gateway payment id from the latest confirmation attempt.
    pub gateway_payment_id: Option<String>,

    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub paid_at: Option<Timestamp>,
}

/// Validated input for creating an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub order_id: OrderId,
    pub amount: i64,
    pub currency: String,
}

impl NewOrder {
    /// Validates order creation input. Currency defaults to [`DEFAULT_CURRENCY`].
    pub fn new(
        order_id: impl Into<String>,
        amount: i64,
        currency: Option<String>,
    ) -> Result<Self, ValidationError> {
        let order_id = OrderId::new(order_id)?;

        if amount < 1 {
            return Err(ValidationError::below_minimum("amount", 1, amount));
        }

        let currency = match currency {
            Some(c) if !c.trim().is_empty() => c.trim().to_uppercase(),
            _ => DEFAULT_CURRENCY.to_string(),
        };
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "currency",
                "expected a three-letter ISO 4217 code",
            ));
        }

        Ok(Self {
            order_id,
            amount,
            currency,
        })
    }
}

impl Order {
    /// Creates a pending order linked to its gateway order.
    pub fn create(new_order: NewOrder, gateway_order_id: Option<String>, now: Timestamp) -> Self {
        Self {
            order_id: new_order.order_id,
            status: OrderStatus::Pending,
            gateway_order_id,
            gateway_payment_id: None,
            amount: new_order.amount,
            currency: new_order.currency,
            created_at: now,
            updated_at: now,
            paid_at: None,
        }
    }

    /// Returns true once the order has been paid.
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Whether a payment signed for `gateway_order_id` may settle this order.
    ///
    /// Orders created without a gateway order accept any gateway order.
    pub fn accepts_gateway_order(&self, gateway_order_id: &str) -> bool {
        self.gateway_order_id
            .as_deref()
            .map_or(true, |linked| linked == gateway_order_id)
    }

    /// Records a payment attempt.
    ///
    /// Returns `false` without touching anything when the order is already
    /// paid, so replays with any payment id or outcome are harmless.
    pub fn apply_payment(
        &mut self,
        gateway_payment_id: &str,
        outcome: PaymentOutcome,
        now: Timestamp,
    ) -> bool {
        let next = match self.status.transition_to(outcome.target_status()) {
            Ok(next) => next,
            Err(_) => return false,
        };

        self.status = next;
        self.gateway_payment_id = Some(gateway_payment_id.to_string());
        self.updated_at = now;
        if next == OrderStatus::Paid {
            self.paid_at = Some(now);
        }
        true
    }
}
