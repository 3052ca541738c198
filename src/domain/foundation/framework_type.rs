//! FrameworkType enum representing the five thinking frameworks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The five guided-reflection frameworks, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkType {
    ProblemFraming,
    RootCause,
    RiskAssessment,
    TradeoffEvaluation,
    NextSteps,
}

impl FrameworkType {
    /// Returns all frameworks in canonical order.
    pub fn all() -> &'static [FrameworkType] {
        &[
            FrameworkType::ProblemFraming,
            FrameworkType::RootCause,
            FrameworkType::RiskAssessment,
            FrameworkType::TradeoffEvaluation,
            FrameworkType::NextSteps,
        ]
    }

    /// Returns the 0-based index of this framework in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            FrameworkType::ProblemFraming => 0,
            FrameworkType::RootCause => 1,
            FrameworkType::RiskAssessment => 2,
            FrameworkType::TradeoffEvaluation => 3,
            FrameworkType::NextSteps => 4,
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameworkType::ProblemFraming => "Problem Framing",
            FrameworkType::RootCause => "Root Cause",
            FrameworkType::RiskAssessment => "Risk Assessment",
            FrameworkType::TradeoffEvaluation => "Tradeoff Evaluation",
            FrameworkType::NextSteps => "Next Steps",
        }
    }

    /// Returns the URL-safe identifier (matches the serde representation).
    pub fn slug(&self) -> &'static str {
        match self {
            FrameworkType::ProblemFraming => "problem_framing",
            FrameworkType::RootCause => "root_cause",
            FrameworkType::RiskAssessment => "risk_assessment",
            FrameworkType::TradeoffEvaluation => "tradeoff_evaluation",
            FrameworkType::NextSteps => "next_steps",
        }
    }
}

impl fmt::Display for FrameworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for FrameworkType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.slug() == s)
            .ok_or_else(|| ValidationError::unknown_framework(s))
    }
}
