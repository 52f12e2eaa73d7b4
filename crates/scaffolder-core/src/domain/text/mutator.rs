//! Idempotent insertion of fragments into documents.
//!
//! Pure functions: text in, text out. The caller decides whether to persist.

use std::borrow::Cow;

use crate::domain::error::DomainError;
use crate::domain::text::fragment::Fragment;
use crate::domain::text::region::{RegionSpec, locate};

/// Literal needles identifying an entity. The entity is present when every
/// needle occurs somewhere in the document, independently of the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityKey {
    needles: Vec<String>,
}

impl EntityKey {
    pub fn new<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            needles: needles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    pub fn is_present_in(&self, doc: &str) -> bool {
        !self.needles.is_empty() && self.needles.iter().all(|n| doc.contains(n.as_str()))
    }
}

/// Tri-state result of an insertion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionOutcome {
    /// The entity key was found; nothing changed.
    AlreadyPresent,
    /// The fragment was spliced in.
    Inserted,
    /// No marker pair and no structural anchor; nothing changed.
    Unsupported,
}

impl InsertionOutcome {
    pub fn changed(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A document together with what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<'a> {
    pub document: Cow<'a, str>,
    pub outcome: InsertionOutcome,
}

impl<'a> Mutation<'a> {
    fn unchanged(doc: &'a str, outcome: InsertionOutcome) -> Self {
        Self {
            document: Cow::Borrowed(doc),
            outcome,
        }
    }
}

/// Insert `fragment` into `doc` unless `key` is already present.
///
/// Every byte outside the insertion point is preserved.
pub fn mutate<'a>(
    doc: &'a str,
    key: &EntityKey,
    fragment: &Fragment,
    spec: &RegionSpec,
) -> Mutation<'a> {
    if key.is_present_in(doc) {
        return Mutation::unchanged(doc, InsertionOutcome::AlreadyPresent);
    }

    let located = locate(doc, spec);
    let Some(region) = located.region() else {
        return Mutation::unchanged(doc, InsertionOutcome::Unsupported);
    };

    let rendered = fragment.render(&region.indent);
    let mut out = String::with_capacity(doc.len() + rendered.len() + 1);
    out.push_str(&doc[..region.offset]);
    if region.leading_break {
        out.push('\n');
    }
    out.push_str(&rendered);
    out.push_str(&doc[region.offset..]);

    Mutation {
        document: Cow::Owned(out),
        outcome: InsertionOutcome::Inserted,
    }
}

/// Make sure a `open`/`close` container exists, adding an empty one before the
/// last `parent_close` when it does not.
///
/// Returns `Ok(None)` when the container is already there. A document without
/// `parent_close` cannot be repaired and is reported as malformed.
pub fn ensure_container(
    doc: &str,
    open: &str,
    close: &'static str,
    parent_close: &'static str,
    indent: &str,
) -> Result<Option<String>, DomainError> {
    if doc.contains(open) && doc.contains(close) {
        return Ok(None);
    }

    let at = doc
        .rfind(parent_close)
        .ok_or(DomainError::MalformedDocument {
            missing: parent_close,
        })?;
    let line_start = doc[..at].rfind('\n').map_or(0, |i| i + 1);
    let (offset, leading_break) = if doc[line_start..at].trim().is_empty() {
        (line_start, false)
    } else {
        (at, true)
    };

    let mut out = String::with_capacity(doc.len() + 64);
    out.push_str(&doc[..offset]);
    if leading_break {
        out.push('\n');
    }
    out.push_str(&format!("{indent}{open}\n{indent}{close}\n"));
    out.push_str(&doc[offset..]);
    Ok(Some(out))
}
