//! Gateway payment signature verification.
//!
//! After checkout the gateway signs `"{gateway_order_id}|{gateway_payment_id}"`
//! with HMAC-SHA256 using the merchant key secret and hands the lowercase hex
//! digest to the browser. Recomputing it here proves the pair came from the
//! gateway and was not forged by the client.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// The signing secret is missing. A deployment problem, not a request error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Payment signing secret is not configured")]
pub struct ConfigurationError;

/// Verifier for gateway payment signatures.
///
/// Holds an HMAC keyed once at startup and cloned per verification.
#[derive(Clone)]
pub struct PaymentSignatureVerifier {
    keyed_mac: HmacSha256,
}

impl PaymentSignatureVerifier {
    /// Creates a verifier for the given signing secret.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the secret is empty.
    pub fn new(secret: &str) -> Result<Self, ConfigurationError> {
        if secret.is_empty() {
            return Err(ConfigurationError);
        }
        let keyed_mac =
            HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| ConfigurationError)?;
        Ok(Self { keyed_mac })
    }

    /// Computes the lowercase hex signature for an order/payment pair.
    pub fn compute_signature(&self, gateway_order_id: &str, gateway_payment_id: &str) -> String {
        let mut mac = self.keyed_mac.clone();
        mac.update(signed_payload(gateway_order_id, gateway_payment_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Returns true iff `supplied_signature` is exactly the expected digest.
    pub fn verify(
        &self,
        gateway_order_id: &str,
        gateway_payment_id: &str,
        supplied_signature: &str,
    ) -> bool {
        let expected = self.compute_signature(gateway_order_id, gateway_payment_id);
        constant_time_compare(expected.as_bytes(), supplied_signature.as_bytes())
    }
}

impl fmt::Debug for PaymentSignatureVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentSignatureVerifier").finish_non_exhaustive()
    }
}

/// One-shot verification with an explicit secret.
///
/// # Errors
///
/// Returns `ConfigurationError` if `secret` is empty.
pub fn verify(
    gateway_order_id: &str,
    gateway_payment_id: &str,
    secret: &str,
    supplied_signature: &str,
) -> Result<bool, ConfigurationError> {
    let verifier = PaymentSignatureVerifier::new(secret)?;
    Ok(verifier.verify(gateway_order_id, gateway_payment_id, supplied_signature))
}

/// Gateway ids are alphanumeric tokens and never contain `|`, so no escaping.
fn signed_payload(gateway_order_id: &str, gateway_payment_id: &str) -> String {
    format!("{}|{}", gateway_order_id, gateway_payment_id)
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
