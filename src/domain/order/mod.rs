//! Order module - payment state of storefront orders.

mod aggregate;
mod status;

pub use aggregate::{NewOrder, Order, DEFAULT_CURRENCY};
pub use status::{OrderStatus, PaymentOutcome};
