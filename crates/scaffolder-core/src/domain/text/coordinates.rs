//! Reading simple tag values out of a POM without parsing it.

/// First `groupId`, `artifactId` and `version` values of a POM.
///
/// For a POM with a `<parent>` block these are the parent's coordinates,
/// which is what child generators inherit from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomCoordinates {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl PomCoordinates {
    pub fn read(doc: &str) -> Self {
        Self {
            group_id: read_tag_value(doc, "groupId").map(str::to_string),
            artifact_id: read_tag_value(doc, "artifactId").map(str::to_string),
            version: read_tag_value(doc, "version").map(str::to_string),
        }
    }
}

/// Value of the first `<tag>value</tag>` whose value is a single
/// whitespace-free token, ignoring surrounding whitespace.
pub fn read_tag_value<'a>(doc: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let mut rest = doc;
    while let Some(at) = rest.find(&open) {
        let after = &rest[at + open.len()..];
        let value_end = after.find('<').unwrap_or(after.len());
        let value = after[..value_end].trim();

        let well_formed = after[value_end..].starts_with(&close)
            && !value.is_empty()
            && !value.contains(char::is_whitespace);
        if well_formed {
            return Some(value);
        }
        rest = after;
    }
    None
}
