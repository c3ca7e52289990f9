//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Razorpay:
//! - Gateway order creation (`POST /v1/orders`)
//!
//! Payment signatures produced by Razorpay checkout are verified by
//! [`PaymentSignatureVerifier`](crate::domain::payment::PaymentSignatureVerifier)
//! using the same key secret.
//!
//! # Configuration
//!
//! - `VISTARA__PAYMENT__RAZORPAY_KEY_ID`: public key id (rzp_test_... / rzp_live_...)
//! - `VISTARA__PAYMENT__RAZORPAY_KEY_SECRET`: key secret, also the HMAC key

mod mock_gateway;
mod razorpay_gateway;

pub use mock_gateway::MockPaymentGateway;
pub use razorpay_gateway::{RazorpayConfig, RazorpayGateway};
