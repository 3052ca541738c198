//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Thinking Studio domain.

mod errors;
mod framework_type;
mod ids;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use framework_type::FrameworkType;
pub use ids::ReportId;
pub use timestamp::Timestamp;
