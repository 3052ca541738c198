//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes module; [`build_router`]
//! assembles them with the shared middleware stack.

pub mod analysis;
pub mod error;
pub mod frameworks;
mod router;

pub use analysis::{analysis_router, AnalysisAppState};
pub use error::ErrorResponse;
pub use frameworks::{frameworks_router, FrameworksAppState};
pub use router::{build_router, health_handler};
