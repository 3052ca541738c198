//! HTTP DTOs for framework endpoints.

use serde::{Deserialize, Serialize};

use crate::application::GenerateReportResult;
use crate::domain::foundation::{FrameworkType, ReportId, Timestamp};
use crate::domain::report::{FieldSpec, FieldValues, FrameworkTemplate};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/frameworks/:framework/report`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReportRequest {
    /// Field key to entered text; absent keys count as empty.
    #[serde(default)]
    pub fields: FieldValues,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A framework as listed in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkSummary {
    pub framework: FrameworkType,
    pub name: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl From<&FrameworkTemplate> for FrameworkSummary {
    fn from(template: &FrameworkTemplate) -> Self {
        Self {
            framework: template.framework,
            name: template.framework.display_name(),
            title: template.title,
            fields: template.fields,
        }
    }
}

/// Catalog listing in tab order.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkListResponse {
    pub frameworks: Vec<FrameworkSummary>,
}

/// One framework with its closing questions.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkDetailResponse {
    #[serde(flatten)]
    pub summary: FrameworkSummary,
    pub reflection_header: &'static str,
    pub reflection_questions: &'static [&'static str],
}

impl From<&FrameworkTemplate> for FrameworkDetailResponse {
    fn from(template: &FrameworkTemplate) -> Self {
        Self {
            summary: template.into(),
            reflection_header: template.reflection.header,
            reflection_questions: template.reflection.questions,
        }
    }
}

/// A rendered report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub report_id: ReportId,
    pub framework: FrameworkType,
    pub content: String,
    pub generated_at: Timestamp,
}

impl From<GenerateReportResult> for ReportResponse {
    fn from(result: GenerateReportResult) -> Self {
        Self {
            report_id: result.report_id,
            framework: result.framework,
            content: result.content,
            generated_at: result.generated_at,
        }
    }
}
