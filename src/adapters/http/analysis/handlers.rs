//! HTTP handlers for analysis endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapters::http::error::ErrorResponse;
use crate::application::{
    BuildAnalysisPromptCommand, BuildAnalysisPromptHandler, CheckAnalysisStructureHandler,
    CheckAnalysisStructureQuery,
};
use crate::domain::analysis::{
    Level, GUIDANCE_PRINCIPLES, OUTPUT_TEMPLATE, RCA_DIMENSIONS, RISK_CATEGORIES,
};
use crate::domain::foundation::ValidationError;

use super::dto::{
    AnalysisPromptRequest, AnalysisPromptResponse, DimensionsResponse, PrinciplesResponse,
    StructureCheckRequest, StructureCheckResponse, TemplateResponse,
};

/// Shared state for analysis routes.
#[derive(Clone, Default)]
pub struct AnalysisAppState {
    pub build_prompt: BuildAnalysisPromptHandler,
    pub check_structure: CheckAnalysisStructureHandler,
}

impl AnalysisAppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// API error type for analysis endpoints.
#[derive(Debug)]
pub enum AnalysisApiError {
    BadRequest(String),
}

impl From<ValidationError> for AnalysisApiError {
    fn from(err: ValidationError) -> Self {
        AnalysisApiError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> Response {
        match self {
            AnalysisApiError::BadRequest(msg) => {
                ErrorResponse::bad_request(msg).into_response_with(StatusCode::BAD_REQUEST)
            }
        }
    }
}

/// POST /api/analysis/prompt - Build the guided analysis for a problem
pub async fn build_prompt(
    State(state): State<AnalysisAppState>,
    Json(request): Json<AnalysisPromptRequest>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let result = state.build_prompt.handle(BuildAnalysisPromptCommand {
        problem_statement: request.problem_statement,
    })?;

    Ok(Json(AnalysisPromptResponse::from(result)))
}

/// POST /api/analysis/structure - Check a written analysis for required sections
pub async fn check_structure(
    State(state): State<AnalysisAppState>,
    Json(request): Json<StructureCheckRequest>,
) -> impl IntoResponse {
    let report = state.check_structure.handle(CheckAnalysisStructureQuery {
        content: request.content,
    });

    Json(StructureCheckResponse::from(report))
}

/// GET /api/analysis/principles
pub async fn get_principles() -> impl IntoResponse {
    Json(PrinciplesResponse {
        principles: GUIDANCE_PRINCIPLES,
    })
}

/// GET /api/analysis/template
pub async fn get_template() -> impl IntoResponse {
    Json(TemplateResponse {
        template: OUTPUT_TEMPLATE,
    })
}

/// GET /api/analysis/dimensions
pub async fn get_dimensions() -> impl IntoResponse {
    Json(DimensionsResponse {
        root_cause_dimensions: RCA_DIMENSIONS,
        risk_categories: RISK_CATEGORIES,
        levels: Level::all(),
    })
}
