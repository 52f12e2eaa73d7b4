//! Writable-region location inside semi-structured documents.
//!
//! A region is found either by a pair of sentinel comments (the fast path) or
//! by a structural tag pair (the fallback). No tree is ever built; every
//! lookup is a literal substring search and the first occurrence wins.

/// Two literal sentinel strings delimiting a writable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPair {
    pub start: &'static str,
    pub end: &'static str,
}

impl MarkerPair {
    pub const MODULES: MarkerPair = MarkerPair {
        start: "<!-- scaffolder:modules:start -->",
        end: "<!-- scaffolder:modules:end -->",
    };

    pub const DEPENDENCIES: MarkerPair = MarkerPair {
        start: "<!-- scaffolder:deps:start -->",
        end: "<!-- scaffolder:deps:end -->",
    };
}

/// Structural fallback: `open` ... `close`, optionally searched only after the
/// first occurrence of `scope`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralAnchor {
    pub scope: Option<&'static str>,
    pub open: &'static str,
    pub close: &'static str,
}

/// Where new entries of one kind go, and how they are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSpec {
    /// Between markers, else between structural tags.
    Delimited {
        markers: MarkerPair,
        anchor: StructuralAnchor,
        /// Line prefixes (after indentation) that identify sibling entries.
        entry_shapes: &'static [&'static str],
        default_indent: &'static str,
    },
    /// Appended after the last byte of the document.
    EndOfDocument,
}

impl RegionSpec {
    /// `<modules>` list of an aggregator POM.
    pub const fn module_list() -> Self {
        Self::Delimited {
            markers: MarkerPair::MODULES,
            anchor: StructuralAnchor {
                scope: None,
                open: "<modules>",
                close: "</modules>",
            },
            entry_shapes: &["<module>", "<!--"],
            default_indent: "    ",
        }
    }

    /// `<dependencies>` inside `<dependencyManagement>` of a BOM.
    pub const fn dependency_management() -> Self {
        Self::Delimited {
            markers: MarkerPair::DEPENDENCIES,
            anchor: StructuralAnchor {
                scope: Some("<dependencyManagement>"),
                open: "<dependencies>",
                close: "</dependencies>",
            },
            entry_shapes: &["<dependency>", "</dependency>", "<!--"],
            default_indent: "      ",
        }
    }

    /// Top-level `<dependencies>` of a project POM.
    pub const fn project_dependencies() -> Self {
        Self::Delimited {
            markers: MarkerPair::DEPENDENCIES,
            anchor: StructuralAnchor {
                scope: None,
                open: "<dependencies>",
                close: "</dependencies>",
            },
            entry_shapes: &["<dependency>", "</dependency>", "<!--"],
            default_indent: "    ",
        }
    }

    /// Key-value property files: new blocks go at the end.
    pub const fn end_of_document() -> Self {
        Self::EndOfDocument
    }
}

/// A located insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Byte offset where the fragment is spliced in.
    pub offset: usize,
    /// Indentation the fragment is rendered with.
    pub indent: String,
    /// The insertion point is mid-line; the fragment must start a new line.
    pub leading_break: bool,
}

/// Outcome of [`locate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionResult {
    Marked(Region),
    Anchored(Region),
    Unsupported,
}

impl RegionResult {
    pub fn region(&self) -> Option<&Region> {
        match self {
            Self::Marked(r) | Self::Anchored(r) => Some(r),
            Self::Unsupported => None,
        }
    }
}

/// Find the writable point for `spec` in `doc`.
///
/// Markers only count when both are present and `end` follows `start`; any
/// other combination falls through to the structural anchor.
pub fn locate(doc: &str, spec: &RegionSpec) -> RegionResult {
    let RegionSpec::Delimited {
        markers,
        anchor,
        entry_shapes,
        default_indent,
    } = spec
    else {
        let leading_break = !doc.is_empty() && !doc.ends_with('\n');
        return RegionResult::Marked(Region {
            offset: doc.len(),
            indent: String::new(),
            leading_break,
        });
    };

    if let Some(region) = locate_marked(doc, markers, entry_shapes, default_indent) {
        return RegionResult::Marked(region);
    }

    match locate_anchored(doc, anchor, entry_shapes, default_indent) {
        Some(region) => RegionResult::Anchored(region),
        None => RegionResult::Unsupported,
    }
}

fn locate_marked(
    doc: &str,
    markers: &MarkerPair,
    shapes: &[&str],
    default_indent: &str,
) -> Option<Region> {
    let start = doc.find(markers.start)?;
    let end = doc.find(markers.end)?;
    let inner_start = start + markers.start.len();
    if end < inner_start {
        return None;
    }

    let (offset, leading_break) = insertion_point(doc, end);
    let indent = last_entry_indent(&doc[inner_start..end], shapes)
        .or_else(|| own_line_indent(doc, end))
        .or_else(|| own_line_indent(doc, start))
        .unwrap_or(default_indent);

    Some(Region {
        offset,
        indent: indent.to_string(),
        leading_break,
    })
}

fn locate_anchored(
    doc: &str,
    anchor: &StructuralAnchor,
    shapes: &[&str],
    default_indent: &str,
) -> Option<Region> {
    let from = match anchor.scope {
        Some(scope) => doc.find(scope)?,
        None => 0,
    };
    let open = from + doc[from..].find(anchor.open)?;
    let inner_start = open + anchor.open.len();
    let close = inner_start + doc[inner_start..].find(anchor.close)?;

    let (offset, leading_break) = insertion_point(doc, close);
    let indent = last_entry_indent(&doc[inner_start..close], shapes).unwrap_or(default_indent);

    Some(Region {
        offset,
        indent: indent.to_string(),
        leading_break,
    })
}

/// Splice position for content that must end up before `at`.
///
/// When only whitespace precedes `at` on its line, the fragment goes at the
/// start of that line so the closing token keeps its own indentation.
fn insertion_point(doc: &str, at: usize) -> (usize, bool) {
    let line_start = line_start(doc, at);
    if doc[line_start..at].trim().is_empty() {
        (line_start, false)
    } else {
        (at, true)
    }
}

fn line_start(doc: &str, at: usize) -> usize {
    doc[..at].rfind('\n').map_or(0, |i| i + 1)
}

/// Indentation of the token at `at`, if it is the first thing on its line.
fn own_line_indent(doc: &str, at: usize) -> Option<&str> {
    let prefix = &doc[line_start(doc, at)..at];
    prefix.trim().is_empty().then_some(prefix)
}

/// Indentation of the last complete line inside `inner` that looks like an
/// existing entry. The partial first line (after the opening token) is skipped.
fn last_entry_indent<'a>(inner: &'a str, shapes: &[&str]) -> Option<&'a str> {
    inner
        .split('\n')
        .skip(1)
        .filter_map(|line| {
            let trimmed = line.trim_start();
            shapes
                .iter()
                .any(|shape| trimmed.starts_with(shape))
                .then(|| &line[..line.len() - trimmed.len()])
        })
        .last()
}
