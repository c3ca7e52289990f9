//! Razorpay order API client.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{GatewayError, GatewayOrder, GatewayOrderRequest, PaymentGateway};

/// Default Razorpay API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.razorpay.com";

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Public key id (rzp_test_... or rzp_live_...).
    key_id: String,

    /// Key secret. Used for API basic auth and payment signatures.
    key_secret: SecretString,

    /// Base URL for the Razorpay API.
    api_base_url: String,

    /// Per-request timeout.
    timeout: Duration,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.api_base_url)
    }
}

/// Razorpay error envelope: `{"error": {"code": "...", "description": "..."}}`.
#[derive(Debug, Deserialize)]
struct RazorpayErrorBody {
    error: RazorpayErrorDetail,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

fn describe_error(body: &str) -> String {
    match serde_json::from_str::<RazorpayErrorBody>(body) {
        Ok(parsed) => {
            let code = parsed.error.code.unwrap_or_else(|| "UNKNOWN".to_string());
            let description = parsed.error.description.unwrap_or_default();
            format!("{}: {}", code, description)
        }
        Err(_) => body.to_string(),
    }
}

/// Razorpay payment gateway adapter.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new Razorpay adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Network` if the HTTP client cannot be built.
    pub fn new(config: RazorpayConfig) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: GatewayOrderRequest) -> Result<GatewayOrder, GatewayError> {
        let response = self
            .http_client
            .post(self.config.orders_url())
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = describe_error(&error_text);
            tracing::error!(
                status = status.as_u16(),
                receipt = %request.receipt,
                error = %message,
                "Razorpay create_order failed"
            );
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let order: GatewayOrder = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            gateway_order_id = %order.id,
            receipt = %request.receipt,
            amount = order.amount,
            "Razorpay order created"
        );

        Ok(order)
    }
}
