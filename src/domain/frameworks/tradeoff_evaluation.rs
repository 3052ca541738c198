//! Tradeoff Evaluation - two options compared across fixed dimensions.

use crate::domain::foundation::FrameworkType;
use crate::domain::report::{
    Comparison, Dimension, FieldSpec, FrameworkTemplate, OptionLabel, ReflectionBlock, Section,
};

const OPTION_A: OptionLabel = OptionLabel::new("option_a_name", "Option A");
const OPTION_B: OptionLabel = OptionLabel::new("option_b_name", "Option B");

static FIELDS: &[FieldSpec] = &[
    FieldSpec::required("context", "Decision Context"),
    FieldSpec::optional("option_a_name", "Option A Name"),
    FieldSpec::required("option_a_desc", "Option A Description"),
    FieldSpec::optional("option_b_name", "Option B Name"),
    FieldSpec::required("option_b_desc", "Option B Description"),
    FieldSpec::optional("time_a", "Time to Implement (Option A)"),
    FieldSpec::optional("time_b", "Time to Implement (Option B)"),
    FieldSpec::optional("resources_a", "Resource Requirements (Option A)"),
    FieldSpec::optional("resources_b", "Resource Requirements (Option B)"),
    FieldSpec::optional("impact_a", "User Impact (Option A)"),
    FieldSpec::optional("impact_b", "User Impact (Option B)"),
    FieldSpec::optional("complexity_a", "Technical Complexity (Option A)"),
    FieldSpec::optional("complexity_b", "Technical Complexity (Option B)"),
    FieldSpec::optional("tradeoffs", "Key Tradeoffs"),
];

static SECTIONS: &[Section] = &[
    Section::Field { key: "context" },
    Section::NamedBlock {
        name: OPTION_A,
        body: "option_a_desc",
    },
    Section::NamedBlock {
        name: OPTION_B,
        body: "option_b_desc",
    },
    Section::Comparison(Comparison {
        heading: "COMPARISON:\n\n",
        first: OPTION_A,
        second: OPTION_B,
        dimensions: &[
            Dimension::new("Time to Implement", "time_a", "time_b"),
            Dimension::new("Resource Requirements", "resources_a", "resources_b"),
            Dimension::new("User Impact", "impact_a", "impact_b"),
            Dimension::new("Technical Complexity", "complexity_a", "complexity_b"),
        ],
    }),
    Section::Field { key: "tradeoffs" },
];

pub fn template() -> FrameworkTemplate {
    FrameworkTemplate {
        framework: FrameworkType::TradeoffEvaluation,
        title: "⚖️ TRADEOFF ANALYSIS",
        fields: FIELDS,
        sections: SECTIONS,
        reflection: ReflectionBlock {
            header: "🤔 DECISION CONSIDERATIONS:",
            questions: &[
                "Which factors are most important in this context?",
                "What are you optimizing for?",
                "What are you willing to sacrifice?",
                "Are there hidden costs or benefits?",
                "Can you test either approach on a smaller scale?",
            ],
        },
        validation_message: "Please fill in the decision context and both options.",
    }
}
