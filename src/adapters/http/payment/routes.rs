//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_order, get_order, verify_payment, PaymentAppState};

/// Create the payment API router.
///
/// # Routes
///
/// - `POST /verify` - Verify a completed gateway payment
/// - `POST /orders` - Open a payable order with the gateway
/// - `GET /orders/:order_id` - Get an order's payment state
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/verify", post(verify_payment))
        .route("/orders", post(create_order))
        .route("/orders/:order_id", get(get_order))
}

/// Create the complete payment module router, mounted under `/payments`.
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new().nest("/payments", payment_routes())
}
