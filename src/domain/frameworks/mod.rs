//! The five framework templates and their shared catalog.
//!
//! Each submodule is pure data describing one framework; all rendering
//! goes through the generic engine in [`crate::domain::report`].

mod catalog;
pub mod next_steps;
pub mod problem_framing;
pub mod risk_assessment;
pub mod root_cause;
pub mod tradeoff_evaluation;

pub use catalog::FrameworkCatalog;
