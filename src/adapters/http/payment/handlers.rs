//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::payment::{
    CreateOrderCommand, CreateOrderHandler, GetOrderHandler, GetOrderQuery, OrderError,
    PaymentVerificationError, VerifyPaymentCommand, VerifyPaymentHandler,
};
use crate::domain::foundation::ValidationError;
use crate::domain::payment::{PaymentSignatureVerifier, VerificationOutcome};
use crate::ports::{OrderStore, PaymentGateway};

use super::dto::{
    CreateOrderRequest, CreateOrderResponse, ErrorResponse, OrderResponse, SuccessResponse,
    VerifyPaymentRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for payment routes.
///
/// Built once at startup; every field is cheap to clone.
#[derive(Clone)]
pub struct PaymentAppState {
    pub order_store: Arc<dyn OrderStore>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub verifier: Arc<PaymentSignatureVerifier>,
    /// Public gateway key id returned to the checkout widget.
    pub gateway_key_id: String,
}

impl PaymentAppState {
    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(self.order_store.clone(), self.verifier.clone())
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.order_store.clone(), self.payment_gateway.clone())
    }

    pub fn get_order_handler(&self) -> GetOrderHandler {
        GetOrderHandler::new(self.order_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /payments/verify - Verify a completed gateway payment
pub async fn verify_payment(
    State(state): State<PaymentAppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Response, PaymentApiError> {
    // An unreadable body carries no fields at all
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Unreadable verification body");
            VerifyPaymentRequest::default()
        }
    };

    let cmd = VerifyPaymentCommand {
        order_id: request.order_id,
        gateway_order_id: request.gateway_order_id,
        gateway_payment_id: request.gateway_payment_id,
        gateway_signature: request.gateway_signature,
    };

    let result = state.verify_payment_handler().handle(cmd).await?;

    let response = match result.outcome {
        VerificationOutcome::Verified => (StatusCode::OK, Json(SuccessResponse::ok())).into_response(),
        VerificationOutcome::Rejected => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid signature")),
        )
            .into_response(),
    };

    Ok(response)
}

/// POST /payments/orders - Open a payable order with the gateway
pub async fn create_order(
    State(state): State<PaymentAppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, OrderApiError> {
    let Json(request) = payload.map_err(|rejection| {
        OrderError::Invalid(ValidationError::invalid_format(
            "body",
            rejection.body_text(),
        ))
    })?;

    let cmd = CreateOrderCommand {
        order_id: request.order_id,
        amount: request.amount,
        currency: request.currency,
    };

    let order = state.create_order_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse::new(&order, state.gateway_key_id.clone())),
    ))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /payments/orders/:order_id - Get an order's payment state
pub async fn get_order(
    State(state): State<PaymentAppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, OrderApiError> {
    let order = state
        .get_order_handler()
        .handle(GetOrderQuery { order_id })
        .await?;

    Ok(Json(OrderResponse::from(order)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts verification errors to HTTP responses.
#[derive(Debug)]
pub struct PaymentApiError(PaymentVerificationError);

impl From<PaymentVerificationError> for PaymentApiError {
    fn from(err: PaymentVerificationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PaymentVerificationError::MissingFields(_) => StatusCode::BAD_REQUEST,
            PaymentVerificationError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            PaymentVerificationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.0.message()))).into_response()
    }
}

/// API error type that converts order errors to HTTP responses.
#[derive(Debug)]
pub struct OrderApiError(OrderError);

impl From<OrderError> for OrderApiError {
    fn from(err: OrderError) -> Self {
        Self(err)
    }
}

impl IntoResponse for OrderApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            OrderError::Invalid(_) => StatusCode::BAD_REQUEST,
            OrderError::AlreadyExists(_) => StatusCode::CONFLICT,
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::Gateway(_) => StatusCode::BAD_GATEWAY,
            OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "Order request failed");
        }

        (status, Json(ErrorResponse::new(self.0.message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OrderId;
    use crate::ports::{GatewayError, OrderStoreError};

    fn order_id() -> OrderId {
        OrderId::new("ord_1").unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn missing_fields_maps_to_400() {
        let err = PaymentApiError(PaymentVerificationError::MissingFields(
            ValidationError::empty_field("gateway_signature"),
        ));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_order_maps_to_404() {
        let err = PaymentApiError(PaymentVerificationError::OrderNotFound(order_id()));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = PaymentApiError(PaymentVerificationError::Store(OrderStoreError::Database(
            "pool timed out".to_string(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn order_errors_map_to_statuses() {
        let cases = [
            (
                OrderError::Invalid(ValidationError::below_minimum("amount", 1, 0)),
                StatusCode::BAD_REQUEST,
            ),
            (OrderError::AlreadyExists(order_id()), StatusCode::CONFLICT),
            (OrderError::NotFound(order_id()), StatusCode::NOT_FOUND),
            (
                OrderError::Gateway(GatewayError::Network("reset".to_string())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                OrderError::Store(OrderStoreError::Database("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(OrderApiError(err).into_response().status(), expected);
        }
    }
}
