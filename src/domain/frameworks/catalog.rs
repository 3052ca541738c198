//! Process-wide registry of framework templates.

use once_cell::sync::Lazy;

use crate::domain::foundation::{FrameworkType, ValidationError};
use crate::domain::report::FrameworkTemplate;

use super::{next_steps, problem_framing, risk_assessment, root_cause, tradeoff_evaluation};

/// Templates are built on first access and never mutated afterwards.
static CATALOG: Lazy<FrameworkCatalog> = Lazy::new(FrameworkCatalog::build);

/// All framework templates, indexed by [`FrameworkType`] order.
#[derive(Debug)]
pub struct FrameworkCatalog {
    templates: Vec<FrameworkTemplate>,
}

impl FrameworkCatalog {
    /// Returns the shared catalog.
    pub fn global() -> &'static FrameworkCatalog {
        &CATALOG
    }

    fn build() -> Self {
        let templates = FrameworkType::all()
            .iter()
            .map(|framework| match framework {
                FrameworkType::ProblemFraming => problem_framing::template(),
                FrameworkType::RootCause => root_cause::template(),
                FrameworkType::RiskAssessment => risk_assessment::template(),
                FrameworkType::TradeoffEvaluation => tradeoff_evaluation::template(),
                FrameworkType::NextSteps => next_steps::template(),
            })
            .collect();
        Self { templates }
    }

    /// Returns the template for a framework.
    pub fn get(&self, framework: FrameworkType) -> &FrameworkTemplate {
        &self.templates[framework.order_index()]
    }

    /// Resolves a template from its URL slug.
    pub fn by_slug(&self, slug: &str) -> Result<&FrameworkTemplate, ValidationError> {
        let framework: FrameworkType = slug.parse()?;
        Ok(self.get(framework))
    }

    /// Templates in tab order.
    pub fn all(&self) -> &[FrameworkTemplate] {
        &self.templates
    }
}
