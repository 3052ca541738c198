//! HTTP handlers for framework endpoints.
//!
//! These handlers connect axum routes to the report application handler.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::{GenerateReportCommand, GenerateReportError, GenerateReportHandler};
use crate::domain::foundation::{ErrorCode, FrameworkType, ValidationError};
use crate::domain::frameworks::FrameworkCatalog;

use super::dto::{
    FrameworkDetailResponse, FrameworkListResponse, FrameworkSummary, GenerateReportRequest,
    ReportResponse,
};
use crate::adapters::http::error::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for framework routes.
#[derive(Clone)]
pub struct FrameworksAppState {
    pub catalog: &'static FrameworkCatalog,
}

impl FrameworksAppState {
    pub fn new(catalog: &'static FrameworkCatalog) -> Self {
        Self { catalog }
    }

    pub fn generate_report_handler(&self) -> GenerateReportHandler {
        GenerateReportHandler::new(self.catalog)
    }
}

impl Default for FrameworksAppState {
    fn default() -> Self {
        Self::new(FrameworkCatalog::global())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for framework endpoints.
#[derive(Debug)]
pub enum FrameworkApiError {
    NotFound(String),
    BadRequest(String),
    Validation(GenerateReportError),
}

impl From<ValidationError> for FrameworkApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnknownFramework(slug) => FrameworkApiError::NotFound(slug),
            other => FrameworkApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<GenerateReportError> for FrameworkApiError {
    fn from(err: GenerateReportError) -> Self {
        FrameworkApiError::Validation(err)
    }
}

impl IntoResponse for FrameworkApiError {
    fn into_response(self) -> Response {
        match self {
            FrameworkApiError::NotFound(slug) => {
                ErrorResponse::not_found("Framework", &slug).into_response_with(StatusCode::NOT_FOUND)
            }
            FrameworkApiError::BadRequest(msg) => {
                ErrorResponse::bad_request(msg).into_response_with(StatusCode::BAD_REQUEST)
            }
            FrameworkApiError::Validation(GenerateReportError::Validation(failure)) => {
                ErrorResponse::new(ErrorCode::ValidationFailed, failure.message.clone())
                    .with_details(serde_json::json!({ "missing": failure.missing }))
                    .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
            }
        }
    }
}

fn resolve(state: &FrameworksAppState, slug: &str) -> Result<FrameworkType, FrameworkApiError> {
    Ok(state.catalog.by_slug(slug)?.framework)
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/frameworks - List frameworks in tab order
pub async fn list_frameworks(State(state): State<FrameworksAppState>) -> impl IntoResponse {
    let frameworks = state
        .catalog
        .all()
        .iter()
        .map(FrameworkSummary::from)
        .collect();

    Json(FrameworkListResponse { frameworks })
}

/// GET /api/frameworks/:framework - Fields and reflection questions for one framework
pub async fn get_framework(
    State(state): State<FrameworksAppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, FrameworkApiError> {
    let framework = resolve(&state, &slug)?;
    let template = state.catalog.get(framework);

    Ok(Json(FrameworkDetailResponse::from(template)))
}

/// POST /api/frameworks/:framework/report - Validate and render a report
pub async fn generate_report(
    State(state): State<FrameworksAppState>,
    Path(slug): Path<String>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<impl IntoResponse, FrameworkApiError> {
    let framework = resolve(&state, &slug)?;

    let cmd = GenerateReportCommand::new(framework, request.fields);
    let result = state.generate_report_handler().handle(cmd)?;

    Ok(Json(ReportResponse::from(result)))
}
