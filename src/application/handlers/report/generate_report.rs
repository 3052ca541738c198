//! GenerateReportHandler - Command handler for rendering a framework report.
//!
//! Validates the submitted fields against the framework template and renders
//! the report only when every required field is filled. Pure: nothing is
//! stored and no collaborator is called.

use tracing::debug;

use crate::domain::foundation::{FrameworkType, ReportId, Timestamp};
use crate::domain::frameworks::FrameworkCatalog;
use crate::domain::report::{self, FieldValues, ValidationFailure};

/// Command to generate a report for one framework.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub framework: FrameworkType,
    pub values: FieldValues,
}

impl GenerateReportCommand {
    pub fn new(framework: FrameworkType, values: FieldValues) -> Self {
        Self { framework, values }
    }
}

/// Result of successful report generation.
#[derive(Debug, Clone)]
pub struct GenerateReportResult {
    pub report_id: ReportId,
    pub framework: FrameworkType,
    /// The rendered plain-text report.
    pub content: String,
    pub generated_at: Timestamp,
}

/// Error type for report generation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateReportError {
    /// Required fields were empty; carries the framework's fixed message.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl GenerateReportError {
    /// The message to surface to the user.
    pub fn user_message(&self) -> &str {
        match self {
            GenerateReportError::Validation(failure) => &failure.message,
        }
    }
}

/// Handler for generating framework reports.
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateReportHandler::new(FrameworkCatalog::global());
/// let cmd = GenerateReportCommand::new(FrameworkType::RootCause, values);
/// let result = handler.handle(cmd)?;
/// println!("{}", result.content);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GenerateReportHandler {
    catalog: &'static FrameworkCatalog,
}

impl GenerateReportHandler {
    pub fn new(catalog: &'static FrameworkCatalog) -> Self {
        Self { catalog }
    }

    pub fn handle(
        &self,
        cmd: GenerateReportCommand,
    ) -> Result<GenerateReportResult, GenerateReportError> {
        let template = self.catalog.get(cmd.framework);

        // 1. Validate; never render on failure
        let missing = report::validate(template, &cmd.values);
        if !missing.is_empty() {
            return Err(ValidationFailure::new(
                cmd.framework,
                template.validation_message,
                missing,
            )
            .into());
        }

        // 2. Render
        let content = report::render(template, &cmd.values);

        debug!(
            framework = cmd.framework.slug(),
            fields = cmd.values.len(),
            bytes = content.len(),
            "Generated report"
        );

        Ok(GenerateReportResult {
            report_id: ReportId::new(),
            framework: cmd.framework,
            content,
            generated_at: Timestamp::now(),
        })
    }
}

impl Default for GenerateReportHandler {
    fn default() -> Self {
        Self::new(FrameworkCatalog::global())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
