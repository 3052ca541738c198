//! The generic report engine shared by every framework.
//!
//! Generation is a two-step contract: callers run [`validate`] and only call
//! [`render`] once it returns no missing keys. [`generate`] performs both
//! steps for callers that do not need them separately.

use super::failure::ValidationFailure;
use super::field::FieldValues;
use super::template::FrameworkTemplate;

/// Outcome of a generation request.
pub type Report = Result<String, ValidationFailure>;

/// Returns the keys of required fields whose value is empty or absent.
pub fn validate(template: &FrameworkTemplate, values: &FieldValues) -> Vec<String> {
    template
        .required_fields()
        .filter(|f| !values.is_filled(f.key))
        .map(|f| f.key.to_string())
        .collect()
}

/// Renders the report text.
///
/// Does not re-validate: required fields are assumed filled. Output ends
/// with the reflection block's trailing newline, untrimmed.
pub fn render(template: &FrameworkTemplate, values: &FieldValues) -> String {
    let mut out = String::new();
    out.push_str(template.title);
    out.push_str("\n\n");

    for section in template.sections {
        section.render_into(template, values, &mut out);
    }

    out.push_str(template.reflection.header);
    out.push('\n');
    for question in template.reflection.questions {
        out.push_str(&format!("• {}\n", question));
    }

    out
}

/// Validates, then renders only if every required field is filled.
pub fn generate(template: &FrameworkTemplate, values: &FieldValues) -> Report {
    let missing = validate(template, values);
    if !missing.is_empty() {
        return Err(ValidationFailure::new(
            template.framework,
            template.validation_message,
            missing,
        ));
    }
    Ok(render(template, values))
}
