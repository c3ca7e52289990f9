//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `order` - Order aggregate and payment status state machine
//! - `payment` - Gateway signature verification

pub mod foundation;
pub mod order;
pub mod payment;
