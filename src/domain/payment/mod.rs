//! Payment module - gateway signature verification.
//!
//! - `signature` - HMAC-SHA256 check of gateway order/payment pairs
//! - `verification` - request/result types for the verification handshake

mod signature;
mod verification;

pub use signature::{verify, ConfigurationError, PaymentSignatureVerifier};
pub use verification::{VerificationOutcome, VerificationRequest, VerificationResult};
