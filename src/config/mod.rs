//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VISTARA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use vistara_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod payment;
mod server;

pub use database::{DatabaseConfig, StorageBackend};
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Order storage (in-memory or PostgreSQL)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Payment gateway configuration (Razorpay)
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VISTARA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VISTARA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `VISTARA__PAYMENT__RAZORPAY_KEY_SECRET=...` -> `payment.razorpay_key_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("VISTARA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid. A
    /// missing key secret is reported as `MissingRequired("RAZORPAY_KEY_SECRET")`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.payment.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "VISTARA__PAYMENT__RAZORPAY_KEY_ID",
        "VISTARA__PAYMENT__RAZORPAY_KEY_SECRET",
        "VISTARA__SERVER__PORT",
        "VISTARA__SERVER__ENVIRONMENT",
        "VISTARA__DATABASE__BACKEND",
        "VISTARA__DATABASE__URL",
    ];

    fn set_minimal_env() {
        env::set_var("VISTARA__PAYMENT__RAZORPAY_KEY_ID", "rzp_test_abc123");
        env::set_var("VISTARA__PAYMENT__RAZORPAY_KEY_SECRET", "whsec_test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.payment.razorpay_key_id, "rzp_test_abc123");
        assert_eq!(config.payment.key_secret(), Some("whsec_test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("VISTARA__PAYMENT__RAZORPAY_KEY_ID", "rzp_test_abc123");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"))
        );
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.payment.api_base_url, "https://api.razorpay.com");
    }

    #[test]
    fn test_postgres_backend_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VISTARA__DATABASE__BACKEND", "postgres");
        env::set_var("VISTARA__DATABASE__URL", "postgresql://vistara@localhost/orders");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.backend, StorageBackend::Postgres);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VISTARA__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VISTARA__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
