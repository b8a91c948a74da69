//! `{{placeholder}}` substitution for plist and appdmg templates.
//!
//! Substitution is literal: every `{{key}}` occurrence of a known key is
//! replaced by its value verbatim. There are no conditionals, loops or
//! escaping, which keeps plist/JSON templates byte-for-byte predictable.

use std::collections::BTreeMap;

/// Placeholder values for a single template.
///
/// Built fresh for every file rendered.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    values: BTreeMap<String, String>,
}

impl TemplateVars {
    /// Creates an empty set of values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value for `{{key}}`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Replaces every `{{key}}` in `template` with its value.
    ///
    /// A single left-to-right pass: inserted values are never scanned again,
    /// and tokens with no value are copied through unchanged.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };

            match self.values.get(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    // Step one brace so `{{{key}}}` still finds the inner token
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Returns the names of `{{...}}` placeholders still present in `text`.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = &after[..end];
        if !name.is_empty() && !name.contains('{') && !found.iter().any(|f| f == name) {
            found.push(name.to_string());
        }
        rest = &after[end + 2..];
    }

    found
}

/// Renders `template` and warns about placeholders left unresolved.
pub fn render_checked(template: &str, vars: &TemplateVars, source: &std::path::Path) -> String {
    let rendered = vars.render(template);
    for name in unresolved_placeholders(&rendered) {
        log::warn!(
            "Template {} has no value for {{{{{}}}}}",
            source.display(),
            name
        );
    }
    rendered
}
