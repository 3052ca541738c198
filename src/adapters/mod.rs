//! Adapters - Implementations of port interfaces.
//!
//! - `notification` - In-memory notifier with a visibility window
//! - `display` - In-memory output display
//! - `http` - REST API over the report builder and analysis guide

pub mod display;
pub mod http;
pub mod notification;

pub use display::InMemoryOutputDisplay;
pub use notification::{InMemoryNotifier, Notification, DEFAULT_DISPLAY_SECS, HISTORY_LIMIT};
