//! BuildAnalysisPromptHandler - produces the guided analysis for a problem.

use crate::domain::analysis::{analysis_prompt, OUTPUT_TEMPLATE};
use crate::domain::foundation::ValidationError;

/// Command to build the analysis guide.
#[derive(Debug, Clone)]
pub struct BuildAnalysisPromptCommand {
    pub problem_statement: String,
}

/// The guide plus the skeleton the answer should follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildAnalysisPromptResult {
    pub prompt: String,
    pub output_template: &'static str,
}

/// Handler for building analysis guides.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildAnalysisPromptHandler;

impl BuildAnalysisPromptHandler {
    pub fn new() -> Self {
        Self
    }

    /// Rejects blank problem statements; the guide is meaningless without one.
    pub fn handle(
        &self,
        cmd: BuildAnalysisPromptCommand,
    ) -> Result<BuildAnalysisPromptResult, ValidationError> {
        if cmd.problem_statement.trim().is_empty() {
            return Err(ValidationError::empty_field("problem_statement"));
        }

        Ok(BuildAnalysisPromptResult {
            prompt: analysis_prompt(&cmd.problem_statement),
            output_template: OUTPUT_TEMPLATE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_statement_is_rejected() {
        let result = BuildAnalysisPromptHandler::new().handle(BuildAnalysisPromptCommand {
            problem_statement: "   ".to_string(),
        });
        assert_eq!(
            result.unwrap_err(),
            ValidationError::empty_field("problem_statement")
        );
    }

    #[test]
    fn statement_is_embedded_in_prompt() {
        let result = BuildAnalysisPromptHandler::new()
            .handle(BuildAnalysisPromptCommand {
                problem_statement: "Should we build a mobile app?".to_string(),
            })
            .unwrap();
        assert!(result.prompt.contains("## Problem Statement\nShould we build a mobile app?\n"));
        assert_eq!(result.output_template, OUTPUT_TEMPLATE);
    }
}
