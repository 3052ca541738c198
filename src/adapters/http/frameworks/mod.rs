//! HTTP adapter for framework endpoints.
//!
//! Exposes the five thinking frameworks via REST API:
//! - `GET /api/frameworks` - List frameworks
//! - `GET /api/frameworks/:framework` - Get one framework's form definition
//! - `POST /api/frameworks/:framework/report` - Generate a report

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{FrameworkApiError, FrameworksAppState};
pub use routes::frameworks_router;
