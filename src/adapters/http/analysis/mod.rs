//! HTTP adapter for the guided decision analysis.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{AnalysisApiError, AnalysisAppState};
pub use routes::analysis_router;
