//! Root Cause - "5 whys" progression from an observed symptom.

use crate::domain::foundation::FrameworkType;
use crate::domain::report::{FieldSpec, FrameworkTemplate, NumberedList, ReflectionBlock, Section};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::required("symptom", "Observed Symptom"),
    FieldSpec::optional("why1", "Why #1"),
    FieldSpec::optional("why2", "Why #2"),
    FieldSpec::optional("why3", "Why #3"),
    FieldSpec::optional("why4", "Why #4"),
    FieldSpec::optional("why5", "Why #5"),
    FieldSpec::optional("factors", "Contributing Factors"),
];

static SECTIONS: &[Section] = &[
    Section::Field { key: "symptom" },
    Section::NumberedList(NumberedList {
        heading: "5 Whys Progression:\n",
        items: &["why1", "why2", "why3", "why4", "why5"],
    }),
    Section::Field { key: "factors" },
];

pub fn template() -> FrameworkTemplate {
    FrameworkTemplate {
        framework: FrameworkType::RootCause,
        title: "🔍 ROOT CAUSE ANALYSIS",
        fields: FIELDS,
        sections: SECTIONS,
        reflection: ReflectionBlock {
            header: "💡 INSIGHTS:",
            questions: &[
                "What patterns emerge from this analysis?",
                "Which causes are within your control?",
                "What would address the root cause vs. symptoms?",
                "What evidence supports this analysis?",
            ],
        },
        validation_message: "Please describe the observed symptom.",
    }
}
