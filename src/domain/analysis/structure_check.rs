//! Checks a written analysis for the required section headings.

use serde::Serialize;

/// Sections every completed analysis must mention.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "Problem Reframing",
    "Root Cause Analysis",
    "Decision Options",
    "Risk Management",
    "Suggested Direction",
    "Next Steps",
    "Success Signals",
];

/// Presence of one required section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionPresence {
    pub section: &'static str,
    pub present: bool,
}

/// Result of [`validate_structure`], in required-section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub sections: Vec<SectionPresence>,
}

impl StructureReport {
    pub fn all_present(&self) -> bool {
        self.sections.iter().all(|s| s.present)
    }

    /// Names of absent sections.
    pub fn missing(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .filter(|s| !s.present)
            .map(|s| s.section)
            .collect()
    }
}

/// Case-insensitive substring check for each required section name.
pub fn validate_structure(content: &str) -> StructureReport {
    let haystack = content.to_lowercase();
    let sections = REQUIRED_SECTIONS
        .iter()
        .map(|&section| SectionPresence {
            section,
            present: haystack.contains(&section.to_lowercase()),
        })
        .collect();
    StructureReport { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::OUTPUT_TEMPLATE;

    #[test]
    fn empty_content_misses_everything() {
        let report = validate_structure("");
        assert!(!report.all_present());
        assert_eq!(report.missing(), REQUIRED_SECTIONS.to_vec());
    }

    #[test]
    fn output_template_satisfies_itself() {
        assert!(validate_structure(OUTPUT_TEMPLATE).all_present());
    }

    #[test]
    fn matching_ignores_case() {
        let report = validate_structure("## PROBLEM REFRAMING\n## next steps");
        assert!(report.sections[0].present);
        assert!(report.sections[5].present);
        assert_eq!(report.missing().len(), 5);
    }

    #[test]
    fn report_keeps_required_order() {
        let report = validate_structure("anything");
        let names: Vec<_> = report.sections.iter().map(|s| s.section).collect();
        assert_eq!(names, REQUIRED_SECTIONS.to_vec());
    }
}
