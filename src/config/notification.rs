//! Notification configuration

use serde::Deserialize;
use std::ops::RangeInclusive;

use super::error::ValidationError;

/// Accepted notification windows, in seconds.
pub const DISPLAY_SECS_RANGE: RangeInclusive<u64> = 1..=60;

/// How long a notification stays visible.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_display_secs")]
    pub display_secs: u64,
}

impl NotificationConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !DISPLAY_SECS_RANGE.contains(&self.display_secs) {
            return Err(ValidationError::InvalidDisplayWindow);
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
        }
    }
}

fn default_display_secs() -> u64 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_four_seconds() {
        let config = NotificationConfig::default();
        assert_eq!(config.display_secs, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_window_bounds() {
        for secs in [0, 61] {
            let config = NotificationConfig { display_secs: secs };
            assert_eq!(config.validate(), Err(ValidationError::InvalidDisplayWindow));
        }
        for secs in [1, 60] {
            assert!(NotificationConfig { display_secs: secs }.validate().is_ok());
        }
    }
}
