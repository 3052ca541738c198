//! Analysis handlers.

mod build_analysis_prompt;
mod check_analysis_structure;

pub use build_analysis_prompt::{
    BuildAnalysisPromptCommand, BuildAnalysisPromptHandler, BuildAnalysisPromptResult,
};
pub use check_analysis_structure::{CheckAnalysisStructureHandler, CheckAnalysisStructureQuery};
