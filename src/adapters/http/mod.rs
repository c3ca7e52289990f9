//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the payment routes, the health check and the
//! shared middleware stack.

pub mod payment;

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use payment::{payment_router, PaymentAppState};

use payment::ErrorResponse;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware settings for [`app_router`].
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(15),
            cors_origins: Vec::new(),
        }
    }
}

/// GET /health - Liveness check
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}

fn panic_response(_err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    tracing::error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}

/// Build the full application router.
pub fn app_router(state: PaymentAppState, settings: &HttpSettings) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(health))
        .merge(payment_router())
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> axum::response::Response {
        let app = Router::new().route("/", get(health)).layer(layer);
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn configured_origin_is_allowed_and_invalid_entries_skipped() {
        let layer = cors_layer(&[
            "https://vistarastyles.com".to_string(),
            "bad\norigin".to_string(),
        ]);

        let response = preflight(layer, "https://vistarastyles.com").await;

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://vistarastyles.com"
        );
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_allow_header() {
        let layer = cors_layer(&["https://vistarastyles.com".to_string()]);

        let response = preflight(layer, "https://evil.example").await;

        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn empty_origin_list_allows_any() {
        let response = preflight(cors_layer(&[]), "https://anywhere.example").await;

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[test]
    fn panic_response_is_generic_server_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn default_settings() {
        let settings = HttpSettings::default();
        assert_eq!(settings.request_timeout, Duration::from_secs(15));
        assert!(settings.cors_origins.is_empty());
    }
}
