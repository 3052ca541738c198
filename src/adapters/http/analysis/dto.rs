//! HTTP DTOs for analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::application::BuildAnalysisPromptResult;
use crate::domain::analysis::{Level, RootCauseDimension, SectionPresence, StructureReport};

/// Body of `POST /api/analysis/prompt`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisPromptRequest {
    pub problem_statement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPromptResponse {
    pub prompt: String,
    pub output_template: &'static str,
}

impl From<BuildAnalysisPromptResult> for AnalysisPromptResponse {
    fn from(result: BuildAnalysisPromptResult) -> Self {
        Self {
            prompt: result.prompt,
            output_template: result.output_template,
        }
    }
}

/// Body of `POST /api/analysis/structure`.
#[derive(Debug, Clone, Deserialize)]
pub struct StructureCheckRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructureCheckResponse {
    pub all_present: bool,
    pub missing: Vec<&'static str>,
    pub sections: Vec<SectionPresence>,
}

impl From<StructureReport> for StructureCheckResponse {
    fn from(report: StructureReport) -> Self {
        Self {
            all_present: report.all_present(),
            missing: report.missing(),
            sections: report.sections,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrinciplesResponse {
    pub principles: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateResponse {
    pub template: &'static str,
}

/// Fixed vocabularies used while writing an analysis.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionsResponse {
    pub root_cause_dimensions: &'static [RootCauseDimension],
    pub risk_categories: &'static [&'static str],
    pub levels: &'static [Level],
}
