//! Report Builder - one generic engine driven by declarative templates.
//!
//! A [`FrameworkTemplate`] lists its input fields, an ordered body of
//! [`Section`] rules, and a closing [`ReflectionBlock`]. The engine
//! validates required fields and renders the plain-text report.

mod builder;
mod failure;
mod field;
mod section;
mod template;

pub use builder::{generate, render, validate, Report};
pub use failure::ValidationFailure;
pub use field::{FieldSpec, FieldValues};
pub use section::{
    Comparison, Dimension, KeywordRoute, NumberedList, OptionLabel, Route, Section, NOT_SPECIFIED,
};
pub use template::{FrameworkTemplate, ReflectionBlock};
