//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresOrderStore` - Order persistence with atomic payment confirmation

mod order_store;

pub use order_store::PostgresOrderStore;
