//! VerifyPaymentHandler - Command handler for the payment verification handshake.

use std::sync::Arc;

use crate::domain::order::PaymentOutcome;
use crate::domain::payment::{PaymentSignatureVerifier, VerificationRequest, VerificationResult};
use crate::ports::{OrderStore, OrderStoreError};

use super::errors::PaymentVerificationError;

/// Command to verify a completed gateway payment.
///
/// Fields are optional because they arrive straight from the browser;
/// the handler rejects the command before doing anything else if any is
/// absent or empty.
#[derive(Debug, Clone, Default)]
pub struct VerifyPaymentCommand {
    pub order_id: Option<String>,
    pub gateway_order_id: Option<String>,
    pub gateway_payment_id: Option<String>,
    pub gateway_signature: Option<String>,
}

/// Handler for verifying gateway payment signatures and confirming orders.
///
/// Performs no retries. Browsers may resubmit the whole call; the store's
/// idempotent `confirm_payment` makes that safe.
pub struct VerifyPaymentHandler {
    order_store: Arc<dyn OrderStore>,
    verifier: Arc<PaymentSignatureVerifier>,
}

impl VerifyPaymentHandler {
    pub fn new(order_store: Arc<dyn OrderStore>, verifier: Arc<PaymentSignatureVerifier>) -> Self {
        Self {
            order_store,
            verifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifyPaymentCommand,
    ) -> Result<VerificationResult, PaymentVerificationError> {
        // 1. All four fields must be present before anything else happens
        let request = VerificationRequest::from_fields(
            cmd.order_id,
            cmd.gateway_order_id,
            cmd.gateway_payment_id,
            cmd.gateway_signature,
        )
        .map_err(|e| {
            tracing::debug!(field = e.field(), "Payment verification request incomplete");
            PaymentVerificationError::MissingFields(e)
        })?;

        // 2. Recompute the gateway signature
        let signature_valid = self.verifier.verify(
            &request.gateway_order_id,
            &request.gateway_payment_id,
            &request.gateway_signature,
        );

        // 3. Mismatch: report and leave the order untouched
        if !signature_valid {
            tracing::warn!(
                order_id = %request.order_id,
                gateway_order_id = %request.gateway_order_id,
                gateway_payment_id = %request.gateway_payment_id,
                "Payment signature mismatch"
            );
            return Ok(VerificationResult::rejected(request.order_id));
        }

        // 4. Match: confirm the order, bound to the signed gateway order
        let confirmed = self
            .order_store
            .confirm_payment(
                &request.order_id,
                &request.gateway_order_id,
                &request.gateway_payment_id,
                PaymentOutcome::Paid,
            )
            .await;

        let order = match confirmed {
            Ok(order) => order,
            Err(OrderStoreError::GatewayOrderMismatch { .. }) => {
                tracing::warn!(
                    order_id = %request.order_id,
                    gateway_order_id = %request.gateway_order_id,
                    gateway_payment_id = %request.gateway_payment_id,
                    "Signed gateway order does not belong to this order"
                );
                return Ok(VerificationResult::rejected(request.order_id));
            }
            Err(e) => {
                tracing::error!(
                    order_id = %request.order_id,
                    error = %e,
                    "Failed to confirm verified payment"
                );
                return Err(PaymentVerificationError::from(e));
            }
        };

        tracing::info!(
            order_id = %order.order_id,
            gateway_payment_id = %request.gateway_payment_id,
            status = %order.status,
            "Payment verified"
        );

        Ok(VerificationResult::verified(order.order_id))
    }
}
