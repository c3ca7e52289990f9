use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{fmt, EnvFilter};

use vistara_checkout::adapters::{
    app_router, HttpSettings, InMemoryOrderStore, PaymentAppState, PostgresOrderStore,
    RazorpayConfig, RazorpayGateway,
};
use vistara_checkout::config::{AppConfig, ConfigError, StorageBackend, ValidationError};
use vistara_checkout::domain::payment::{ConfigurationError, PaymentSignatureVerifier};
use vistara_checkout::ports::{GatewayError, OrderStore};

/// Reasons the service refuses to start.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Payment signature key: {0}")]
    SignatureKey(#[from] ConfigurationError),

    #[error("Payment gateway client: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("vistara-checkout failed to start: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let secret = config
        .payment
        .key_secret()
        .ok_or(ValidationError::MissingRequired("RAZORPAY_KEY_SECRET"))?;
    let verifier = Arc::new(PaymentSignatureVerifier::new(secret)?);

    let gateway = RazorpayGateway::new(
        RazorpayConfig::new(config.payment.razorpay_key_id.clone(), secret)
            .with_base_url(config.payment.api_base_url.clone())
            .with_timeout(Duration::from_secs(config.payment.api_timeout_secs)),
    )?;

    let order_store = build_order_store(&config).await?;

    let state = PaymentAppState {
        order_store,
        payment_gateway: Arc::new(gateway),
        verifier,
        gateway_key_id: config.payment.razorpay_key_id.clone(),
    };

    let settings = HttpSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = app_router(state, &settings);

    let address = config.server.socket_addr()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!(
        %address,
        environment = ?config.server.environment,
        backend = ?config.database.backend,
        test_mode = config.payment.is_test_mode(),
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

async fn build_order_store(config: &AppConfig) -> Result<Arc<dyn OrderStore>, StartupError> {
    match config.database.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory order store; orders are lost on restart");
            Ok(Arc::new(InMemoryOrderStore::new()))
        }
        StorageBackend::Postgres => {
            let db = &config.database;
            let pool = PgPoolOptions::new()
                .min_connections(db.min_connections)
                .max_connections(db.max_connections)
                .acquire_timeout(db.acquire_timeout())
                .idle_timeout(db.idle_timeout())
                .max_lifetime(db.max_lifetime())
                .connect(&db.url)
                .await?;

            if db.run_migrations {
                tracing::info!("Running database migrations");
                sqlx::migrate!("./migrations").run(&pool).await?;
            }

            Ok(Arc::new(PostgresOrderStore::new(pool)))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
