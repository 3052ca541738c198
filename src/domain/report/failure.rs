//! The single error kind of the Report Builder.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::FrameworkType;

/// Required fields were left empty; nothing was rendered.
///
/// Displays as the framework's fixed, human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationFailure {
    pub framework: FrameworkType,
    pub message: String,
    /// Keys of the empty required fields, in declared order.
    pub missing: Vec<String>,
}

impl ValidationFailure {
    pub fn new(
        framework: FrameworkType,
        message: impl Into<String>,
        missing: Vec<String>,
    ) -> Self {
        Self {
            framework,
            message: message.into(),
            missing,
        }
    }

    /// Returns true if the given key was reported missing.
    pub fn is_missing(&self, key: &str) -> bool {
        self.missing.iter().any(|k| k == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_template_message_only() {
        let failure = ValidationFailure::new(
            FrameworkType::RootCause,
            "Please describe the observed symptom.",
            vec!["symptom".to_string()],
        );
        assert_eq!(failure.to_string(), "Please describe the observed symptom.");
        assert!(failure.is_missing("symptom"));
        assert!(!failure.is_missing("why1"));
    }
}
