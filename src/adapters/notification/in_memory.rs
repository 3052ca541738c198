//! In-memory notifier that models a toast with a visibility window.
//!
//! Keeps the latest notification plus a bounded history for inspection.
//! Used by tests and by embedders that poll for the current toast.

use chrono::Duration;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::config::{NotificationConfig, DISPLAY_SECS_RANGE};
use crate::domain::foundation::Timestamp;
use crate::ports::Notifier;

/// Default time a notification stays visible.
pub const DEFAULT_DISPLAY_SECS: u64 = 4;

/// Number of past notifications retained; older ones are dropped first.
pub const HISTORY_LIMIT: usize = 50;

/// A notification as it was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub shown_at: Timestamp,
    pub hidden_at: Timestamp,
}

impl Notification {
    /// Visible from `shown_at` (inclusive) until `hidden_at` (exclusive).
    pub fn is_visible_at(&self, at: &Timestamp) -> bool {
        !at.is_before(&self.shown_at) && at.is_before(&self.hidden_at)
    }
}

#[derive(Debug, Default)]
struct NotifierState {
    current: Option<Notification>,
    history: VecDeque<Notification>,
}

/// In-memory [`Notifier`]; a newer message replaces the current one.
#[derive(Debug, Clone)]
pub struct InMemoryNotifier {
    window: Duration,
    state: Arc<RwLock<NotifierState>>,
}

impl InMemoryNotifier {
    /// The window is clamped to the range accepted by [`NotificationConfig`].
    pub fn new(display_secs: u64) -> Self {
        let secs = display_secs.clamp(*DISPLAY_SECS_RANGE.start(), *DISPLAY_SECS_RANGE.end());
        Self {
            window: Duration::seconds(secs as i64),
            state: Arc::new(RwLock::new(NotifierState::default())),
        }
    }

    /// Notifier with the default four-second window.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_DISPLAY_SECS)
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        Self::new(config.display_secs)
    }

    /// Records a notification shown at `at`.
    pub fn notify_at(&self, message: &str, at: Timestamp) {
        let notification = Notification {
            message: message.to_string(),
            shown_at: at,
            hidden_at: Timestamp::from_datetime(*at.as_datetime() + self.window),
        };
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if state.history.len() == HISTORY_LIMIT {
            state.history.pop_front();
        }
        state.history.push_back(notification.clone());
        state.current = Some(notification);
    }

    /// The most recent notification, visible or not.
    pub fn current(&self) -> Option<Notification> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .current
            .clone()
    }

    /// The notification visible at `at`, if any.
    pub fn visible_at(&self, at: &Timestamp) -> Option<Notification> {
        self.current().filter(|n| n.is_visible_at(at))
    }

    /// The notification visible right now, if any.
    pub fn visible(&self) -> Option<Notification> {
        self.visible_at(&Timestamp::now())
    }

    /// The most recent notifications, oldest first, at most [`HISTORY_LIMIT`].
    pub fn history(&self) -> Vec<Notification> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .history
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, message: &str) {
        self.notify_at(message, Timestamp::now());
    }
}
