//! Template entities and the render context.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  Template                                            │
//! │  ├── TemplateId      "service/pom.xml"               │
//! │  └── TemplateSource  Static (built in) | Owned (disk) │
//! ├──────────────────────────────────────────────────────┤
//! │  RenderContext                                       │
//! │  └── {{SERVICE_NAME}} -> "bff"                       │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Placeholders are `{{SCREAMING_SNAKE}}`. GitHub expressions such as
//! `${{ github.sha }}` contain spaces and are never treated as placeholders.

use std::collections::HashMap;
use std::fmt;

use crate::domain::naming;

/// Identifier of a template: its path relative to the templates root,
/// always with `/` separators (`service/pom.xml`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Where a template's text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Compiled into the binary.
    Static(&'static str),
    /// Loaded at runtime (local override directory).
    Owned(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateId,
    pub source: TemplateSource,
}

impl Template {
    pub fn new_static(id: impl Into<String>, content: &'static str) -> Self {
        Self {
            id: TemplateId::new(id),
            source: TemplateSource::Static(content),
        }
    }

    pub fn new_owned(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: TemplateId::new(id),
            source: TemplateSource::Owned(content.into()),
        }
    }

    pub fn content(&self) -> &str {
        match &self.source {
            TemplateSource::Static(s) => s,
            TemplateSource::Owned(s) => s,
        }
    }
}

/// Variables for `{{VARIABLE}}` substitution.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `NOW_ISO_DATE` | "2026-10-18" |
/// | `YEAR` | "2026" |
///
/// Names added through [`RenderContext::with_name`] also get `_PASCAL`,
/// `_KEBAB` and `_PACKAGE` variants.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::default()
            .with_variable("NOW_ISO_DATE", today.format("%Y-%m-%d").to_string())
            .with_variable("YEAR", today.format("%Y").to_string())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Add `key` plus its casing variants.
    pub fn with_name(self, key: &str, value: &str) -> Self {
        self.with_variable(format!("{key}_PASCAL"), naming::to_pascal_case(value))
            .with_variable(format!("{key}_KEBAB"), naming::to_kebab(value))
            .with_variable(format!("{key}_PACKAGE"), naming::to_package_safe(value))
            .with_variable(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace every known `{{VARIABLE}}`. Unknown placeholders stay as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Placeholders of the form `{{NAME}}` still present in `text`.
pub fn unresolved_placeholders(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("{{") {
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => {
                let name = &after[..close];
                let is_placeholder = !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
                if is_placeholder && !found.contains(&name) {
                    found.push(name);
                }
                rest = &after[close + 2..];
            }
            None => break,
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_known_variables() {
        let ctx = RenderContext::new().with_variable("GROUP_ID", "com.acme");
        assert_eq!(
            ctx.render("<groupId>{{GROUP_ID}}</groupId>{{GROUP_ID}}"),
            "<groupId>com.acme</groupId>com.acme"
        );
    }

    #[test]
    fn render_leaves_unknown_and_github_expressions() {
        let ctx = RenderContext::new();
        assert_eq!(
            ctx.render("{{UNKNOWN}} ${{ github.sha }}"),
            "{{UNKNOWN}} ${{ github.sha }}"
        );
    }

    #[test]
    fn with_name_adds_variants() {
        let ctx = RenderContext::new().with_name("USECASE", "getProfile");
        assert_eq!(ctx.get("USECASE"), Some("getProfile"));
        assert_eq!(ctx.get("USECASE_PASCAL"), Some("GetProfile"));
        assert_eq!(ctx.get("USECASE_KEBAB"), Some("get-profile"));
        assert_eq!(ctx.get("USECASE_PACKAGE"), Some("getprofile"));
    }

    #[test]
    fn built_in_date_is_iso() {
        let ctx = RenderContext::new();
        let date = ctx.get("NOW_ISO_DATE").unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
        assert!(date.starts_with(ctx.get("YEAR").unwrap()));
    }

    #[test]
    fn finds_unresolved_placeholders_only() {
        let text = "{{A_B}} ${{ secrets.TOKEN }} {{A_B}} {{lower}} {{C1}}";
        assert_eq!(unresolved_placeholders(text), vec!["A_B", "C1"]);
    }

    #[test]
    fn template_id_normalises_separators() {
        assert_eq!(TemplateId::new("service\\pom.xml").as_str(), "service/pom.xml");
    }
}
