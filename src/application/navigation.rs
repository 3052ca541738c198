//! Tab navigation between framework forms.
//!
//! Holds only which framework is visible; it never touches form data.

use serde::Serialize;

use crate::domain::foundation::FrameworkType;

/// One tab as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabState {
    pub framework: FrameworkType,
    pub label: &'static str,
    pub active: bool,
}

/// Tracks the single active framework tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabNavigator {
    active: FrameworkType,
}

impl TabNavigator {
    /// Starts on the first framework in tab order.
    pub fn new() -> Self {
        Self {
            active: FrameworkType::all()[0],
        }
    }

    /// Makes `framework` the only active tab.
    pub fn select(&mut self, framework: FrameworkType) {
        self.active = framework;
    }

    pub fn active(&self) -> FrameworkType {
        self.active
    }

    pub fn is_active(&self, framework: FrameworkType) -> bool {
        self.active == framework
    }

    /// All tabs in order with their active flag.
    pub fn tabs(&self) -> Vec<TabState> {
        FrameworkType::all()
            .iter()
            .map(|&framework| TabState {
                framework,
                label: framework.display_name(),
                active: self.is_active(framework),
            })
            .collect()
    }
}

impl Default for TabNavigator {
    fn default() -> Self {
        Self::new()
    }
}
