//! Integration tests for framework reports through the form call site.
//!
//! These tests drive each framework the way a page would: fill fields,
//! submit, and observe the notifier and output display adapters.

use std::sync::Arc;

use thinking_studio::adapters::{InMemoryNotifier, InMemoryOutputDisplay};
use thinking_studio::application::{FrameworkForm, GenerateReportHandler, TabNavigator};
use thinking_studio::config::NotificationConfig;
use thinking_studio::ports::OutputDisplay;
use thinking_studio::domain::foundation::FrameworkType;
use thinking_studio::domain::frameworks::next_steps::{
    GENERAL_RECOMMENDATIONS, HIGHER_CONFIDENCE, LOW_CONFIDENCE, MEDIUM_LOW_CONFIDENCE,
};
use thinking_studio::domain::frameworks::FrameworkCatalog;
use thinking_studio::domain::report::{generate, FieldValues};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Page {
    notifier: Arc<InMemoryNotifier>,
    display: Arc<InMemoryOutputDisplay>,
}

impl Page {
    fn new() -> Self {
        Self {
            notifier: Arc::new(InMemoryNotifier::from_config(&NotificationConfig::default())),
            display: Arc::new(InMemoryOutputDisplay::new()),
        }
    }

    fn form(&self, framework: FrameworkType) -> FrameworkForm {
        FrameworkForm::new(
            framework,
            GenerateReportHandler::default(),
            self.notifier.clone(),
            self.display.clone(),
        )
    }
}

fn next_steps_report(confidence: &str) -> String {
    let values = FieldValues::new()
        .with("situation", "Pricing page redesign")
        .with("direction", "Ship to 10% of traffic")
        .with("confidence", confidence);
    let template = FrameworkCatalog::global().get(FrameworkType::NextSteps);
    generate(template, &values).expect("required fields are filled")
}

// =============================================================================
// Problem Framing end to end
// =============================================================================

#[test]
fn problem_framing_scenario_renders_provided_blocks_only() {
    let page = Page::new();
    let values = FieldValues::new()
        .with("problem", "Users can't find settings")
        .with("who", "New users")
        .with("impact", "Increased support tickets")
        .with("why", "")
        .with("assumptions", "");

    let result = page.form(FrameworkType::ProblemFraming).submit(values).unwrap();

    assert_eq!(
        result.content,
        "🎯 STRUCTURED PROBLEM STATEMENT\n\n\
         Problem:\nUsers can't find settings\n\n\
         Affected Parties:\nNew users\n\n\
         Impact:\nIncreased support tickets\n\n\
         📊 REFLECTION QUESTIONS:\n\
         • Are we solving the right problem?\n\
         • Have we considered all affected stakeholders?\n\
         • What might we be missing?\n\
         • How can we validate our assumptions?\n"
    );
    assert!(!result.content.contains("Timing/Urgency"));
    assert!(!result.content.contains("Key Assumptions"));
    assert_eq!(page.display.content().as_deref(), Some(result.content.as_str()));
    assert!(page.notifier.current().is_none());
}

#[test]
fn missing_required_field_notifies_and_leaves_display_untouched() {
    let page = Page::new();
    let form = page.form(FrameworkType::ProblemFraming);

    let err = form
        .submit(FieldValues::new().with("problem", "Users can't find settings"))
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Please fill in at least the Problem Statement, Who is affected, and Impact fields."
    );
    assert!(!page.display.has_content());
    let notification = page.notifier.current().unwrap();
    assert_eq!(notification.message, err.user_message());
}

#[test]
fn failed_resubmit_keeps_previous_report() {
    let page = Page::new();
    let form = page.form(FrameworkType::RootCause);

    form.submit(FieldValues::new().with("symptom", "Checkout errors"))
        .unwrap();
    let shown = page.display.content();

    assert!(form.submit(FieldValues::new()).is_err());
    assert_eq!(page.display.content(), shown);
    assert_eq!(page.notifier.history().len(), 1);
}

// =============================================================================
// Tradeoff comparison
// =============================================================================

#[test]
fn tradeoff_pairs_missing_side_with_not_specified() {
    let base = FieldValues::new()
        .with("context", "Build or buy analytics")
        .with("option_a_desc", "Build in house")
        .with("option_b_desc", "Buy a vendor tool");
    let template = FrameworkCatalog::global().get(FrameworkType::TradeoffEvaluation);

    let with_time = generate(template, &base.clone().with("time_a", "2 weeks").with("time_b", ""))
        .unwrap();
    assert!(with_time.contains(
        "Time to Implement:\n  Option A: 2 weeks\n  Option B: Not specified\n\n"
    ));

    let without_time = generate(template, &base.with("time_a", "").with("time_b", "")).unwrap();
    assert!(!without_time.contains("Time to Implement"));
    assert!(!without_time.contains("COMPARISON:"));
}

#[test]
fn tradeoff_uses_custom_option_names() {
    let values = FieldValues::new()
        .with("context", "Build or buy analytics")
        .with("option_a_name", "Build")
        .with("option_a_desc", "Build in house")
        .with("option_b_desc", "Buy a vendor tool")
        .with("resources_b", "Licence fee");
    let template = FrameworkCatalog::global().get(FrameworkType::TradeoffEvaluation);

    let report = generate(template, &values).unwrap();
    assert!(report.contains("Build:\nBuild in house\n\n"));
    assert!(report.contains("Option B:\nBuy a vendor tool\n\n"));
    assert!(report.contains("Resource Requirements:\n  Build: Not specified\n  Option B: Licence fee\n\n"));
}

// =============================================================================
// Next Steps routing
// =============================================================================

#[test]
fn medium_low_confidence_routes_to_medium_low_block() {
    let report = next_steps_report("Medium-Low");
    assert!(report.contains(MEDIUM_LOW_CONFIDENCE));
    assert!(!report.contains(LOW_CONFIDENCE));
}

#[test]
fn empty_confidence_routes_to_general_block() {
    let report = next_steps_report("");
    assert!(report.contains(GENERAL_RECOMMENDATIONS));
    assert!(!report.contains("Confidence Level"));
}

#[test]
fn high_confidence_routes_to_higher_block() {
    assert!(next_steps_report("High").contains(HIGHER_CONFIDENCE));
    assert!(next_steps_report("Medium-High").contains(HIGHER_CONFIDENCE));
    assert!(next_steps_report("low").contains(LOW_CONFIDENCE));
}

// =============================================================================
// Tabs
// =============================================================================

#[test]
fn every_tab_has_a_working_form() {
    let page = Page::new();
    let mut tabs = TabNavigator::new();

    for framework in FrameworkType::all() {
        tabs.select(*framework);
        assert!(tabs.is_active(*framework));

        let template = FrameworkCatalog::global().get(*framework);
        let values: FieldValues = template
            .fields
            .iter()
            .map(|f| (f.key, format!("{} answer", f.label)))
            .collect();

        let result = page.form(*framework).submit(values).unwrap();
        assert!(result.content.starts_with(template.title));
    }
}
