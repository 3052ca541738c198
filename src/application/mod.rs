//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and binds them to the
//! presentation ports: framework forms, tab navigation, and the handlers
//! used by the HTTP adapter.

pub mod forms;
pub mod handlers;
pub mod navigation;

pub use forms::FrameworkForm;
pub use handlers::{
    BuildAnalysisPromptCommand, BuildAnalysisPromptHandler, BuildAnalysisPromptResult,
    CheckAnalysisStructureHandler, CheckAnalysisStructureQuery, GenerateReportCommand,
    GenerateReportError, GenerateReportHandler, GenerateReportResult,
};
pub use navigation::{TabNavigator, TabState};
