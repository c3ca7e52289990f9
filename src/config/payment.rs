//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Payment configuration (Razorpay)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Public key id (rzp_test_... or rzp_live_...)
    #[serde(default)]
    pub razorpay_key_id: String,

    /// Key secret. Signs payment confirmations and authenticates API calls.
    #[serde(default)]
    pub razorpay_key_secret: Option<SecretString>,

    /// Razorpay API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Gateway API timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub api_timeout_secs: u64,
}

impl PaymentConfig {
    /// The key secret, if configured and non-empty.
    pub fn key_secret(&self) -> Option<&str> {
        self.razorpay_key_secret
            .as_ref()
            .map(|s| s.expose_secret().as_str())
            .filter(|s| !s.is_empty())
    }

    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.razorpay_key_id.starts_with("rzp_test_")
    }

    /// Validate payment configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.key_secret().is_none() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"));
        }
        if self.razorpay_key_id.is_empty() {
            return Err(ValidationError::MissingRequired("RAZORPAY_KEY_ID"));
        }
        if !self.razorpay_key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidRazorpayKeyId);
        }
        if *environment == Environment::Production && !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::ApiBaseUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            razorpay_key_id: String::new(),
            razorpay_key_secret: None,
            api_base_url: default_api_base_url(),
            api_timeout_secs: default_api_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

fn default_api_timeout() -> u64 {
    10
}
