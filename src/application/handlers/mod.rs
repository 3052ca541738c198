//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod report;

pub use analysis::{
    BuildAnalysisPromptCommand, BuildAnalysisPromptHandler, BuildAnalysisPromptResult,
    CheckAnalysisStructureHandler, CheckAnalysisStructureQuery,
};
pub use report::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
};
