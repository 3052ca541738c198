//! Risk Assessment - categorised risks around a pending decision.

use crate::domain::foundation::FrameworkType;
use crate::domain::report::{FieldSpec, FrameworkTemplate, ReflectionBlock, Section};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::required("decision", "Decision Under Consideration"),
    FieldSpec::optional("technical", "Technical Risks"),
    FieldSpec::optional("business", "Business Risks"),
    FieldSpec::optional("ux", "User Experience Risks"),
    FieldSpec::optional("org", "Organizational Risks"),
    FieldSpec::optional("mitigation", "Mitigation Strategies"),
];

static SECTIONS: &[Section] = &[
    Section::Field { key: "decision" },
    Section::Heading {
        text: "IDENTIFIED RISKS:\n\n",
    },
    Section::Field { key: "technical" },
    Section::Field { key: "business" },
    Section::Field { key: "ux" },
    Section::Field { key: "org" },
    Section::Field { key: "mitigation" },
];

pub fn template() -> FrameworkTemplate {
    FrameworkTemplate {
        framework: FrameworkType::RiskAssessment,
        title: "⚠️ RISK ASSESSMENT",
        fields: FIELDS,
        sections: SECTIONS,
        reflection: ReflectionBlock {
            header: "🛡️ RISK MANAGEMENT QUESTIONS:",
            questions: &[
                "Which risks are most likely to materialize?",
                "Which risks would have the highest impact?",
                "Are the mitigation strategies realistic?",
                "What is your risk tolerance for this decision?",
                "What early warning signs should you monitor?",
            ],
        },
        validation_message: "Please describe the decision being considered.",
    }
}
