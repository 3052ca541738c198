//! Notification adapters - implementations of the Notifier port.

mod in_memory;

pub use in_memory::{InMemoryNotifier, Notification, DEFAULT_DISPLAY_SECS, HISTORY_LIMIT};
