//! Notifier Port - transient user-facing messages.
//!
//! Framework call sites surface validation failures through this port
//! instead of rendering a report.

/// Port for showing a short-lived notification to the user.
///
/// # Contract
///
/// Implementations must:
/// - Show `message` for a fixed window (about four seconds by default)
/// - Be safe to call repeatedly; a newer message replaces an older one
/// - Never fail; notification is best-effort presentation
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
