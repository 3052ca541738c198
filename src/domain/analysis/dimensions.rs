//! Fixed analysis vocabularies: root-cause dimensions, risk categories, levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One root-cause dimension with its guiding prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootCauseDimension {
    pub name: &'static str,
    pub prompts: &'static [&'static str],
}

/// Every root-cause analysis must consider these dimensions, in order.
pub const RCA_DIMENSIONS: &[RootCauseDimension] = &[
    RootCauseDimension {
        name: "User",
        prompts: &[
            "What user needs, behaviors, or pain points contribute to this?",
            "What user feedback or data informs this?",
        ],
    },
    RootCauseDimension {
        name: "Product",
        prompts: &[
            "What product design or feature gaps exist?",
            "How does current product behavior contribute?",
        ],
    },
    RootCauseDimension {
        name: "Technology",
        prompts: &[
            "What technical constraints or limitations apply?",
            "Are there technical debt or architecture factors?",
        ],
    },
    RootCauseDimension {
        name: "Process",
        prompts: &[
            "What team, workflow, or organizational processes are involved?",
            "Are there collaboration or communication gaps?",
        ],
    },
    RootCauseDimension {
        name: "External / Market",
        prompts: &[
            "What market forces, competitors, or external factors matter?",
            "How might regulations or industry trends affect this?",
        ],
    },
];

/// Every option is assessed against these risk categories, in order.
pub const RISK_CATEGORIES: &[&str] = &[
    "User Trust",
    "Delivery / Execution",
    "Technical",
    "Legal / Compliance",
    "Business / Metrics",
];

/// Coarse likelihood or impact rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn all() -> &'static [Level] {
        &[Level::Low, Level::Medium, Level::High]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        }
    }

    /// `"Low/Medium/High"`, as shown in rating placeholders.
    pub fn scale() -> String {
        Self::all()
            .iter()
            .map(Level::label)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Free-text notes for one root-cause dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RcaNote {
    pub dimension: String,
    pub notes: String,
}

/// Blank notes for every root-cause dimension, in order.
pub fn rca_template() -> Vec<RcaNote> {
    RCA_DIMENSIONS
        .iter()
        .map(|d| RcaNote {
            dimension: d.name.to_string(),
            notes: String::new(),
        })
        .collect()
}
