//! Analysis Module - Pure helpers for long-form decision analysis.
//!
//! Complements the framework forms with a guided, seven-part analysis:
//! a prompt to work through, the skeleton the answer should follow, and a
//! structure check over the written answer. All functions are pure.

mod analysis_guide;
mod dimensions;
mod structure_check;

pub use analysis_guide::{analysis_prompt, GUIDANCE_PRINCIPLES, OUTPUT_TEMPLATE};
pub use dimensions::{
    rca_template, Level, RcaNote, RootCauseDimension, RCA_DIMENSIONS, RISK_CATEGORIES,
};
pub use structure_check::{
    validate_structure, SectionPresence, StructureReport, REQUIRED_SECTIONS,
};
