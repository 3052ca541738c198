//! CheckAnalysisStructureHandler - reports which required sections a
//! written analysis covers.

use crate::domain::analysis::{validate_structure, StructureReport};

/// Query carrying the user's written analysis.
#[derive(Debug, Clone)]
pub struct CheckAnalysisStructureQuery {
    pub content: String,
}

/// Handler for structure checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckAnalysisStructureHandler;

impl CheckAnalysisStructureHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: CheckAnalysisStructureQuery) -> StructureReport {
        validate_structure(&query.content)
    }
}
