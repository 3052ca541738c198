//! Next Steps - guidance routed by the stated confidence level.
//!
//! Routing order differs from the browser form this template replaces. That
//! form tested `low` before `medium-low`, so "Medium-Low" always produced
//! the low-confidence block and the medium-low block was unreachable. Here
//! `medium-low` is tested first; see [`CONFIDENCE_ROUTES`].

use crate::domain::foundation::FrameworkType;
use crate::domain::report::{FieldSpec, FrameworkTemplate, KeywordRoute, ReflectionBlock, Route, Section};

pub const LOW_CONFIDENCE: &str = "⚠️ Low Confidence - Proceed with Caution:\n\
    • Focus on gathering critical information first\n\
    • Conduct discovery and research\n\
    • Avoid major commitments until gaps are filled\n\
    • Consider a spike or exploration phase\n\n";

pub const MEDIUM_LOW_CONFIDENCE: &str = "📋 Medium-Low Confidence - Validate First:\n\
    • Run small experiments or prototypes\n\
    • Gather data on key unknowns\n\
    • Consult domain experts\n\
    • Build in feedback loops\n\n";

pub const HIGHER_CONFIDENCE: &str = "✅ Higher Confidence - Proceed Thoughtfully:\n\
    • Plan implementation in phases\n\
    • Monitor key metrics and assumptions\n\
    • Keep stakeholders informed\n\
    • Build in checkpoints to reassess\n\n";

pub const GENERAL_RECOMMENDATIONS: &str = "📊 General Recommendations:\n\
    • Assess your confidence level honestly\n\
    • Identify what would increase confidence\n\
    • Balance speed with learning\n\
    • Stay open to pivoting based on new information\n\n";

/// Confidence routing table. "medium-low" sits above "low" so that it is
/// not swallowed by the shorter keyword it contains.
pub const CONFIDENCE_ROUTES: KeywordRoute = KeywordRoute {
    key: "confidence",
    routes: &[
        Route {
            keywords: &["medium-low"],
            block: MEDIUM_LOW_CONFIDENCE,
        },
        Route {
            keywords: &["low"],
            block: LOW_CONFIDENCE,
        },
        Route {
            keywords: &["medium-high", "high"],
            block: HIGHER_CONFIDENCE,
        },
    ],
    fallback: GENERAL_RECOMMENDATIONS,
};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::required("situation", "Current Situation"),
    FieldSpec::required("direction", "Proposed Direction"),
    FieldSpec::optional("confidence", "Confidence Level"),
    FieldSpec::optional("gaps", "Information Gaps"),
    FieldSpec::optional("validation", "Validation Opportunities"),
    FieldSpec::optional("stakeholders", "Stakeholders to Consult"),
];

static SECTIONS: &[Section] = &[
    Section::Field { key: "situation" },
    Section::Field { key: "direction" },
    Section::Inline { key: "confidence" },
    Section::Field { key: "gaps" },
    Section::Heading {
        text: "RECOMMENDED APPROACH:\n\n",
    },
    Section::KeywordRoute(CONFIDENCE_ROUTES),
    Section::Field { key: "validation" },
    Section::Field { key: "stakeholders" },
];

pub fn template() -> FrameworkTemplate {
    FrameworkTemplate {
        framework: FrameworkType::NextSteps,
        title: "🧭 NEXT STEPS GUIDANCE",
        fields: FIELDS,
        sections: SECTIONS,
        reflection: ReflectionBlock {
            header: "💭 FINAL REFLECTIONS:",
            questions: &[
                "What would change your mind?",
                "What could you learn quickly and cheaply?",
                "What is reversible vs. irreversible?",
                "How will you know if you're on the right track?",
            ],
        },
        validation_message: "Please describe the current situation and proposed direction.",
    }
}
