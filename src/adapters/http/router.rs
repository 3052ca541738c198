//! Top-level router: framework and analysis routes plus middleware.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::domain::frameworks::FrameworkCatalog;

use super::analysis::{analysis_router, AnalysisAppState};
use super::frameworks::{frameworks_router, FrameworksAppState};

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the application router from configuration.
///
/// Analysis routes are mounted only when `features.enable_analysis` is set.
pub fn build_router(config: &AppConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_handler))
        .merge(
            frameworks_router().with_state(FrameworksAppState::new(FrameworkCatalog::global())),
        );

    if config.features.enable_analysis {
        app = app.merge(analysis_router().with_state(AnalysisAppState::new()));
    }

    app.layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )))
    .layer(cors_layer(&config.server.cors_origins_list()))
    .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured; otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeatureFlags, ServerConfig};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = build_router(&AppConfig::default());
        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn analysis_routes_mounted_by_default() {
        let app = build_router(&AppConfig::default());
        let response = app
            .oneshot(get_request("/api/analysis/template"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn analysis_routes_absent_when_disabled() {
        let config = AppConfig {
            features: FeatureFlags {
                enable_analysis: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let app = build_router(&config);

        let response = app
            .clone()
            .oneshot(get_request("/api/analysis/template"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.oneshot(get_request("/api/frameworks")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let config = AppConfig {
            server: ServerConfig {
                cors_origins: Some("http://localhost:5173".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let app = build_router(&config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/frameworks")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}
