//! Listener and middleware settings for the checkout API.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request the verify and order endpoints may take.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where the checkout API listens and how its middleware behaves.
///
/// Read from `VISTARA__SERVER__*`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address; an IP literal, not a hostname.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment tier. Production switches logs to JSON and requires an
    /// https gateway endpoint.
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seconds before an in-flight checkout request is abandoned.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Storefront origins allowed to call the API, comma-separated.
    /// Unset lets any origin through.
    pub cors_origins: Option<String>,
}

/// Deployment tier of the checkout service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Listener address; fails on a hostname or malformed host.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Storefront origins with blanks and stray commas dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Rejects settings the listener could not start with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,vistara_checkout=debug,sqlx=warn".to_string()
}

fn default_request_timeout() -> u64 {
    15
}
