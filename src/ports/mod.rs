//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the framework call sites and the presentation layer. Adapters implement
//! these ports.
//!
//! - `Notifier` - Transient message shown when required fields are missing
//! - `OutputDisplay` - Surface that shows the rendered report

mod notifier;
mod output_display;

pub use notifier::Notifier;
pub use output_display::OutputDisplay;
