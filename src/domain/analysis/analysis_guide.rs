//! Long-form decision analysis guide and its expected answer skeleton.

use super::dimensions::{Level, RCA_DIMENSIONS, RISK_CATEGORIES};

/// Principles that keep guidance humble about certainty.
pub const GUIDANCE_PRINCIPLES: &[&str] = &[
    "❌ Never rank options numerically",
    "❌ Never assign scores or ratings",
    "❌ Never claim certainty about outcomes",
    "❌ Never say 'best decision' or 'optimal choice'",
    "✅ Always explain tradeoffs explicitly",
    "✅ Always state assumptions clearly",
    "✅ Always mention when advice would NOT apply",
    "✅ Always acknowledge what you don't know",
];

/// The markdown skeleton a completed analysis must follow.
pub const OUTPUT_TEMPLATE: &str = "## Problem Reframing

## Root Cause Analysis
### User
### Product
### Technology
### Process
### External / Market

## Decision Options

## Risk Management

## Suggested Direction (with Caveats)

## Next Steps

## Success Signals
";

const PROBLEM_REFRAMING: &str = "### 1. Problem Reframing
Consider:
- What is the underlying problem you're trying to solve?
- Who is experiencing this problem?
- What assumptions are you making?
- What would happen if you didn't solve this?

";

const DECISION_OPTIONS: &str = "### 3. Decision Options
List potential approaches (avoid ranking):
- Option A: [Description]
- Option B: [Description]
- Option C: [Description]

";

const CLOSING_SECTIONS: &str = "### 5. Suggested Direction (with Caveats)
- What direction seems reasonable given current information?
- What key assumptions does this rely on?
- When would this advice NOT apply?
- What tradeoffs are you accepting?

### 6. Next Steps
- What can you do to test assumptions?
- What data or feedback would reduce uncertainty?
- Who needs to be involved?
- What is the smallest valuable experiment?

### 7. Success Signals
- What would indicate you're on the right track?
- What would indicate you need to pivot?
- What metrics matter (and which don't)?
";

/// Builds the seven-part analysis guide for a problem statement.
pub fn analysis_prompt(problem_statement: &str) -> String {
    let mut prompt = String::from("# Product Decision Analysis\n\n");
    prompt.push_str(&format!("## Problem Statement\n{}\n\n", problem_statement));
    prompt.push_str("## Analysis Framework\n\n");
    prompt.push_str(PROBLEM_REFRAMING);

    prompt.push_str("### 2. Root Cause Analysis\nExamine each dimension:\n\n");
    for dimension in RCA_DIMENSIONS {
        prompt.push_str(&format!("**{}:**\n", dimension.name));
        for question in dimension.prompts {
            prompt.push_str(&format!("- {}\n", question));
        }
        prompt.push('\n');
    }

    prompt.push_str(DECISION_OPTIONS);

    let scale = Level::scale();
    prompt.push_str("### 4. Risk Management\nFor EACH option, analyze risks across:\n\n");
    for category in RISK_CATEGORIES {
        prompt.push_str(&format!("**{}:**\n", category));
        prompt.push_str(&format!("- Likelihood: [{}]\n", scale));
        prompt.push_str(&format!("- Impact: [{}]\n", scale));
        prompt.push_str("- Mitigation: [Concrete, testable action]\n\n");
    }

    prompt.push_str(CLOSING_SECTIONS);
    prompt
}
