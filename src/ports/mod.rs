//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OrderStore` - Order persistence with idempotent payment confirmation
//! - `PaymentGateway` - Gateway order creation

mod order_store;
mod payment_gateway;

pub use order_store::{OrderStore, OrderStoreError};
pub use payment_gateway::{GatewayError, GatewayOrder, GatewayOrderRequest, PaymentGateway};
