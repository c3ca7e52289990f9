//! HTTP adapter for payment endpoints.
//!
//! - `POST /payments/verify` - Verify a completed gateway payment
//! - `POST /payments/orders` - Open a payable order
//! - `GET /payments/orders/:order_id` - Get an order's payment state

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{OrderApiError, PaymentApiError, PaymentAppState};
pub use routes::{payment_router, payment_routes};
