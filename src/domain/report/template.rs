//! Declarative description of one framework's report.

use serde::Serialize;

use crate::domain::foundation::FrameworkType;

use super::field::FieldSpec;
use super::section::Section;

/// Fixed closing prompts appended to every report of a framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReflectionBlock {
    /// Header line, without the trailing newline.
    pub header: &'static str,
    pub questions: &'static [&'static str],
}

/// Immutable template describing how one framework validates and renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameworkTemplate {
    pub framework: FrameworkType,
    /// Header line including its leading icon, without trailing newlines.
    pub title: &'static str,
    /// Input slots in form order.
    pub fields: &'static [FieldSpec],
    /// Body rules in output order.
    pub sections: &'static [Section],
    pub reflection: ReflectionBlock,
    /// Message surfaced when any required field is empty.
    pub validation_message: &'static str,
}

impl FrameworkTemplate {
    /// Looks up a field by key.
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Display label for a key; falls back to the key itself.
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        self.field(key).map(|f| f.label).unwrap_or(key)
    }

    /// Required fields in declared order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// Keys read by the body that are not declared as fields.
    pub fn undeclared_keys(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .flat_map(Section::keys)
            .filter(|key| self.field(key).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: &[FieldSpec] = &[
        FieldSpec::required("problem", "Problem"),
        FieldSpec::optional("why", "Timing/Urgency"),
        FieldSpec::required("who", "Affected Parties"),
    ];

    static SECTIONS: &[Section] = &[
        Section::Field { key: "problem" },
        Section::Field { key: "stray" },
    ];

    fn template() -> FrameworkTemplate {
        FrameworkTemplate {
            framework: FrameworkType::ProblemFraming,
            title: "TITLE",
            fields: FIELDS,
            sections: SECTIONS,
            reflection: ReflectionBlock {
                header: "Q:",
                questions: &["one?"],
            },
            validation_message: "Fill it in.",
        }
    }

    #[test]
    fn label_resolves_declared_field() {
        assert_eq!(template().label("why"), "Timing/Urgency");
    }

    #[test]
    fn label_falls_back_to_key() {
        assert_eq!(template().label("unknown"), "unknown");
    }

    #[test]
    fn required_fields_keep_declared_order() {
        let keys: Vec<_> = template().required_fields().map(|f| f.key).collect();
        assert_eq!(keys, vec!["problem", "who"]);
    }

    #[test]
    fn undeclared_keys_reports_stray_references() {
        assert_eq!(template().undeclared_keys(), vec!["stray"]);
    }
}
