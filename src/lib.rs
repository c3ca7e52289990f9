//! Vistara Checkout - payment verification for the Vistara Styles storefront
//!
//! After the browser completes a gateway payment it posts the gateway's
//! signed identifiers here. The signature is recomputed with the shared key
//! secret and, when it matches, the order is confirmed as paid exactly once.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
