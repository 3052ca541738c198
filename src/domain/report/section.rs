//! Block-producer rules that make up a template body.
//!
//! Each rule inspects the current [`FieldValues`] and appends zero or more
//! blocks to the report. Rules never fail and never mutate their inputs.

use serde::Serialize;

use super::field::FieldValues;
use super::template::FrameworkTemplate;

/// Placeholder shown for an empty side of a paired comparison.
pub const NOT_SPECIFIED: &str = "Not specified";

/// One ordered rule in a template body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// `"<label>:\n<value>\n\n"` when the field is filled.
    Field { key: &'static str },

    /// `"<label>: <value>\n\n"` when the field is filled.
    Inline { key: &'static str },

    /// Literal text, always emitted.
    Heading { text: &'static str },

    /// `"<name>:\n<body>\n\n"` where the label comes from another field.
    NamedBlock {
        name: OptionLabel,
        body: &'static str,
    },

    NumberedList(NumberedList),

    Comparison(Comparison),

    KeywordRoute(KeywordRoute),
}

/// A label read from a name field, falling back to a literal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionLabel {
    pub name_key: &'static str,
    pub default_name: &'static str,
}

impl OptionLabel {
    pub const fn new(name_key: &'static str, default_name: &'static str) -> Self {
        Self {
            name_key,
            default_name,
        }
    }

    /// Resolves the label for the current values.
    pub fn resolve<'a>(&self, values: &'a FieldValues) -> &'a str {
        values.filled(self.name_key).unwrap_or(self.default_name)
    }
}

/// Ordinal list emitted only when at least one item is filled.
///
/// Items keep their declared ordinal even when earlier items are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberedList {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

/// Side-by-side comparison of two options over fixed dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Emitted once before the first dimension block.
    pub heading: &'static str,
    pub first: OptionLabel,
    pub second: OptionLabel,
    pub dimensions: &'static [Dimension],
}

/// One comparison dimension, e.g. "Time to Implement".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub label: &'static str,
    pub first: &'static str,
    pub second: &'static str,
}

impl Dimension {
    pub const fn new(label: &'static str, first: &'static str, second: &'static str) -> Self {
        Self {
            label,
            first,
            second,
        }
    }

    fn is_filled(&self, values: &FieldValues) -> bool {
        values.is_filled(self.first) || values.is_filled(self.second)
    }
}

/// Decision table selecting exactly one literal block from a field's text.
///
/// The field is lower-cased and each route is tested top to bottom; the
/// first route with a keyword contained in the text wins. Row order is
/// significant because keywords overlap ("medium-low" contains "low").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordRoute {
    pub key: &'static str,
    pub routes: &'static [Route],
    pub fallback: &'static str,
}

/// One row of a [`KeywordRoute`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub keywords: &'static [&'static str],
    pub block: &'static str,
}

impl KeywordRoute {
    /// Returns the index of the matching route, or `None` for the fallback.
    pub fn matched_route(&self, text: &str) -> Option<usize> {
        let text = text.to_lowercase();
        self.routes
            .iter()
            .position(|route| route.keywords.iter().any(|kw| text.contains(kw)))
    }

    /// Returns the block selected for the current values.
    pub fn select(&self, values: &FieldValues) -> &'static str {
        match self.matched_route(values.get(self.key)) {
            Some(idx) => self.routes[idx].block,
            None => self.fallback,
        }
    }
}

impl Section {
    /// Appends this rule's output to `out`.
    pub fn render_into(&self, template: &FrameworkTemplate, values: &FieldValues, out: &mut String) {
        match self {
            Section::Field { key } => {
                if let Some(value) = values.filled(key) {
                    out.push_str(&format!("{}:\n{}\n\n", template.label(key), value));
                }
            }
            Section::Inline { key } => {
                if let Some(value) = values.filled(key) {
                    out.push_str(&format!("{}: {}\n\n", template.label(key), value));
                }
            }
            Section::Heading { text } => out.push_str(text),
            Section::NamedBlock { name, body } => {
                if let Some(value) = values.filled(body) {
                    out.push_str(&format!("{}:\n{}\n\n", name.resolve(values), value));
                }
            }
            Section::NumberedList(list) => {
                if !list.items.iter().any(|key| values.is_filled(key)) {
                    return;
                }
                out.push_str(list.heading);
                for (i, key) in list.items.iter().enumerate() {
                    if let Some(value) = values.filled(key) {
                        out.push_str(&format!("{}. {}\n", i + 1, value));
                    }
                }
                out.push('\n');
            }
            Section::Comparison(comparison) => {
                if !comparison.dimensions.iter().any(|d| d.is_filled(values)) {
                    return;
                }
                let first = comparison.first.resolve(values);
                let second = comparison.second.resolve(values);
                out.push_str(comparison.heading);
                for dimension in comparison.dimensions.iter().filter(|d| d.is_filled(values)) {
                    out.push_str(&format!("{}:\n", dimension.label));
                    out.push_str(&format!(
                        "  {}: {}\n",
                        first,
                        values.filled(dimension.first).unwrap_or(NOT_SPECIFIED)
                    ));
                    out.push_str(&format!(
                        "  {}: {}\n\n",
                        second,
                        values.filled(dimension.second).unwrap_or(NOT_SPECIFIED)
                    ));
                }
            }
            Section::KeywordRoute(route) => out.push_str(route.select(values)),
        }
    }

    /// Field keys this rule reads.
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            Section::Field { key } | Section::Inline { key } => vec![*key],
            Section::Heading { .. } => Vec::new(),
            Section::NamedBlock { name, body } => vec![name.name_key, *body],
            Section::NumberedList(list) => list.items.to_vec(),
            Section::Comparison(c) => {
                let mut keys = vec![c.first.name_key, c.second.name_key];
                for d in c.dimensions {
                    keys.push(d.first);
                    keys.push(d.second);
                }
                keys
            }
            Section::KeywordRoute(route) => vec![route.key],
        }
    }
}
