//! Framework form call site.
//!
//! Binds one framework to its notification and output surfaces: a submit
//! either surfaces the validation message or shows the rendered report,
//! never both.

use std::sync::Arc;

use crate::domain::foundation::FrameworkType;
use crate::domain::report::FieldValues;
use crate::ports::{Notifier, OutputDisplay};

use super::handlers::{
    GenerateReportCommand, GenerateReportError, GenerateReportHandler, GenerateReportResult,
};

/// One framework's form/output pair.
pub struct FrameworkForm {
    framework: FrameworkType,
    handler: GenerateReportHandler,
    notifier: Arc<dyn Notifier>,
    display: Arc<dyn OutputDisplay>,
}

impl FrameworkForm {
    pub fn new(
        framework: FrameworkType,
        handler: GenerateReportHandler,
        notifier: Arc<dyn Notifier>,
        display: Arc<dyn OutputDisplay>,
    ) -> Self {
        Self {
            framework,
            handler,
            notifier,
            display,
        }
    }

    pub fn framework(&self) -> FrameworkType {
        self.framework
    }

    /// Submits the current field values.
    ///
    /// On validation failure the message goes to the notifier and the
    /// display is left untouched.
    pub fn submit(
        &self,
        values: FieldValues,
    ) -> Result<GenerateReportResult, GenerateReportError> {
        match self
            .handler
            .handle(GenerateReportCommand::new(self.framework, values))
        {
            Ok(result) => {
                self.display.display(&result.content);
                Ok(result)
            }
            Err(err) => {
                self.notifier.notify(err.user_message());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations
    // ───────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MockNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for MockNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct MockDisplay {
        shown: Mutex<Vec<String>>,
    }

    impl OutputDisplay for MockDisplay {
        fn display(&self, text: &str) {
            self.shown.lock().unwrap().push(text.to_string());
        }

        fn has_content(&self) -> bool {
            !self.shown.lock().unwrap().is_empty()
        }
    }

    fn form(framework: FrameworkType) -> (FrameworkForm, Arc<MockNotifier>, Arc<MockDisplay>) {
        let notifier = Arc::new(MockNotifier::default());
        let display = Arc::new(MockDisplay::default());
        let form = FrameworkForm::new(
            framework,
            GenerateReportHandler::default(),
            notifier.clone(),
            display.clone(),
        );
        (form, notifier, display)
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn invalid_submit_notifies_and_does_not_display() {
        let (form, notifier, display) = form(FrameworkType::RiskAssessment);

        assert!(form.submit(FieldValues::new()).is_err());

        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec!["Please describe the decision being considered.".to_string()]
        );
        assert!(!display.has_content());
    }

    #[test]
    fn valid_submit_displays_rendered_text() {
        let (form, notifier, display) = form(FrameworkType::RiskAssessment);

        let result = form
            .submit(FieldValues::new().with("decision", "Move to monorepo"))
            .unwrap();

        assert!(notifier.messages.lock().unwrap().is_empty());
        assert_eq!(*display.shown.lock().unwrap(), vec![result.content]);
        assert!(display.has_content());
    }

    #[test]
    fn repeated_failures_notify_each_time() {
        let (form, notifier, _display) = form(FrameworkType::TradeoffEvaluation);

        let _ = form.submit(FieldValues::new());
        let _ = form.submit(FieldValues::new().with("context", "Hosting"));

        assert_eq!(notifier.messages.lock().unwrap().len(), 2);
    }
}
