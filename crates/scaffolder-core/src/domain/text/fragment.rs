//! Fragment rendering for the three entry kinds the mutator inserts.

use crate::domain::entities::Dependency;
use crate::domain::text::mutator::EntityKey;

/// One indentation level inside a structured block.
const NESTED_INDENT: &str = "  ";

/// Content that can be spliced into a located region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `<module>path</module>` on a single line.
    ListItem { value: String },
    /// A `<dependency>` element with one child line per present field.
    StructuredBlock(Dependency),
    /// A marker comment followed by `key=value` lines.
    PropertiesBlock { marker: String, lines: Vec<String> },
}

impl Fragment {
    pub fn module(path: impl Into<String>) -> Self {
        Self::ListItem { value: path.into() }
    }

    pub fn dependency(dependency: Dependency) -> Self {
        Self::StructuredBlock(dependency)
    }

    pub fn properties<I, S>(marker: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::PropertiesBlock {
            marker: marker.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Literal needles identifying this fragment's entity in a document.
    pub fn entity_key(&self) -> EntityKey {
        match self {
            Self::ListItem { value } => EntityKey::new([format!("<module>{value}</module>")]),
            // Same trimmed, non-empty values the rendered block carries.
            Self::StructuredBlock(dep) => EntityKey::new(
                [("artifactId", &dep.artifact_id), ("groupId", &dep.group_id)]
                    .into_iter()
                    .map(|(tag, value)| (tag, value.trim()))
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(tag, value)| format!("<{tag}>{value}</{tag}>")),
            ),
            Self::PropertiesBlock { marker, .. } => EntityKey::new([properties_marker(marker)]),
        }
    }

    /// Render at `indent`. Every kind ends with a line break.
    pub fn render(&self, indent: &str) -> String {
        match self {
            Self::ListItem { value } => format!("{indent}<module>{value}</module>\n"),
            Self::StructuredBlock(dep) => render_dependency(dep, indent),
            Self::PropertiesBlock { marker, lines } => {
                let mut out = format!("\n{}\n", properties_marker(marker));
                for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
                    out.push_str(line);
                    out.push('\n');
                }
                out
            }
        }
    }
}

/// Comment line that marks an appended properties block.
pub fn properties_marker(marker: &str) -> String {
    format!("# scaffolder:{marker}")
}

fn render_dependency(dep: &Dependency, indent: &str) -> String {
    let child = format!("{indent}{NESTED_INDENT}");
    let fields = [
        ("groupId", Some(dep.group_id.as_str())),
        ("artifactId", Some(dep.artifact_id.as_str())),
        ("version", dep.version.as_deref()),
        ("scope", dep.scope.as_deref()),
    ];

    let mut out = format!("{indent}<dependency>\n");
    for (tag, value) in fields {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            out.push_str(&format!("{child}<{tag}>{value}</{tag}>\n"));
        }
    }
    out.push_str(&format!("{indent}</dependency>\n"));
    out
}
