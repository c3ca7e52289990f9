//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `postgres` - PostgreSQL order store
//! - `razorpay` - Razorpay gateway client and mock
//! - `storage` - In-memory order store

pub mod http;
pub mod postgres;
pub mod razorpay;
pub mod storage;

pub use http::{app_router, HttpSettings, PaymentAppState};
pub use postgres::PostgresOrderStore;
pub use razorpay::{MockPaymentGateway, RazorpayConfig, RazorpayGateway};
pub use storage::InMemoryOrderStore;
