//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment;

pub use payment::{
    CreateOrderCommand, CreateOrderHandler, GetOrderHandler, GetOrderQuery, OrderError,
    PaymentVerificationError, VerifyPaymentCommand, VerifyPaymentHandler,
};
