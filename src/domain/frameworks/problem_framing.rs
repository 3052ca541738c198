//! Problem Framing - turns a vague problem into a structured statement.

use crate::domain::foundation::FrameworkType;
use crate::domain::report::{FieldSpec, FrameworkTemplate, ReflectionBlock, Section};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::required("problem", "Problem"),
    FieldSpec::required("who", "Affected Parties"),
    FieldSpec::required("impact", "Impact"),
    FieldSpec::optional("why", "Timing/Urgency"),
    FieldSpec::optional("assumptions", "Key Assumptions"),
];

static SECTIONS: &[Section] = &[
    Section::Field { key: "problem" },
    Section::Field { key: "who" },
    Section::Field { key: "impact" },
    Section::Field { key: "why" },
    Section::Field { key: "assumptions" },
];

pub fn template() -> FrameworkTemplate {
    FrameworkTemplate {
        framework: FrameworkType::ProblemFraming,
        title: "🎯 STRUCTURED PROBLEM STATEMENT",
        fields: FIELDS,
        sections: SECTIONS,
        reflection: ReflectionBlock {
            header: "📊 REFLECTION QUESTIONS:",
            questions: &[
                "Are we solving the right problem?",
                "Have we considered all affected stakeholders?",
                "What might we be missing?",
                "How can we validate our assumptions?",
            ],
        },
        validation_message:
            "Please fill in at least the Problem Statement, Who is affected, and Impact fields.",
    }
}
