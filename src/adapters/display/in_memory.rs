//! In-memory output display holding the last rendered report.

use std::sync::{Arc, RwLock};

use crate::ports::OutputDisplay;

/// In-memory [`OutputDisplay`]; each call replaces the shown text.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOutputDisplay {
    content: Arc<RwLock<Option<String>>>,
}

impl InMemoryOutputDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently shown text.
    pub fn content(&self) -> Option<String> {
        self.content
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl OutputDisplay for InMemoryOutputDisplay {
    fn display(&self, text: &str) {
        *self.content.write().unwrap_or_else(|e| e.into_inner()) = Some(text.to_string());
    }

    fn has_content(&self) -> bool {
        self.content
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
