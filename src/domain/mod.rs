//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, enums, errors, timestamps)
//! - `report` - Generic report engine: field specs, section rules, validate/render
//! - `frameworks` - The five declarative framework templates and their catalog
//! - `analysis` - Long-form decision analysis guide and structure check

pub mod analysis;
pub mod foundation;
pub mod frameworks;
pub mod report;
