//! Route configuration for framework endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{generate_report, get_framework, list_frameworks, FrameworksAppState};

/// Creates the framework router.
///
/// Routes:
/// - `GET /api/frameworks` - List frameworks in tab order
/// - `GET /api/frameworks/:framework` - Field specs and reflection questions
/// - `POST /api/frameworks/:framework/report` - Validate and render a report
pub fn frameworks_router() -> Router<FrameworksAppState> {
    Router::new()
        .route("/api/frameworks", get(list_frameworks))
        .route("/api/frameworks/:framework", get(get_framework))
        .route("/api/frameworks/:framework/report", post(generate_report))
}
