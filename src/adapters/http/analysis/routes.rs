//! Route configuration for analysis endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    build_prompt, check_structure, get_dimensions, get_principles, get_template, AnalysisAppState,
};

/// Creates the analysis router.
///
/// Routes:
/// - `POST /api/analysis/prompt` - Build the seven-part analysis guide
/// - `POST /api/analysis/structure` - Check an answer for required sections
/// - `GET /api/analysis/principles` - Guidance principles
/// - `GET /api/analysis/template` - Output skeleton
/// - `GET /api/analysis/dimensions` - Root-cause dimensions, risk categories, levels
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new()
        .route("/api/analysis/prompt", post(build_prompt))
        .route("/api/analysis/structure", post(check_structure))
        .route("/api/analysis/principles", get(get_principles))
        .route("/api/analysis/template", get(get_template))
        .route("/api/analysis/dimensions", get(get_dimensions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let app = analysis_router().with_state(AnalysisAppState::new());
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn prompt_embeds_problem_statement() {
        let (status, body) = send(post_json(
            "/api/analysis/prompt",
            json!({ "problem_statement": "Trial users do not convert" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("# Product Decision Analysis"));
        assert!(prompt.contains("Trial users do not convert"));
        assert!(body["output_template"].as_str().unwrap().contains("## Next Steps"));
    }

    #[tokio::test]
    async fn blank_prompt_is_bad_request() {
        let (status, body) = send(post_json(
            "/api/analysis/prompt",
            json!({ "problem_statement": "  " }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn structure_check_reports_missing_sections() {
        let (status, body) = send(post_json(
            "/api/analysis/structure",
            json!({ "content": "## problem reframing\n## Root Cause Analysis" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["all_present"], false);
        assert_eq!(body["missing"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn dimensions_lists_fixed_vocabularies() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/analysis/dimensions")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["root_cause_dimensions"].as_array().unwrap().len(), 5);
        assert_eq!(body["risk_categories"][0], "User Trust");
        assert_eq!(body["levels"], json!(["Low", "Medium", "High"]));
    }

    #[tokio::test]
    async fn principles_are_listed() {
        let (status, body) = send(
            Request::builder()
                .uri("/api/analysis/principles")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["principles"].as_array().unwrap().len(), 8);
    }
}
