//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Mount the `/api/analysis` endpoints
    #[serde(default = "default_enable_analysis")]
    pub enable_analysis: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_analysis: default_enable_analysis(),
            json_logs: false,
        }
    }
}

fn default_enable_analysis() -> bool {
    true
}
