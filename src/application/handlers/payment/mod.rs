//! Payment handlers.
//!
//! ## Commands
//! - Verifying a completed gateway payment
//! - Creating a payable order
//!
//! ## Queries
//! - Get order payment state

mod create_order;
mod errors;
mod get_order;
mod verify_payment;

pub use errors::{OrderError, PaymentVerificationError};

// Commands
pub use create_order::{CreateOrderCommand, CreateOrderHandler};
pub use verify_payment::{VerifyPaymentCommand, VerifyPaymentHandler};

// Queries
pub use get_order::{GetOrderHandler, GetOrderQuery};
