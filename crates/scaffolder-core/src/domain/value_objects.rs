//! Validated naming value objects: artifact ids, Java packages, identifiers.
//!
//! Each type is constructed through `FromStr` (or `parse`) and can never hold
//! an invalid value afterwards. Generators take these instead of raw strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::naming;

// ── ArtifactId ───────────────────────────────────────────────────────────────

/// A Maven artifact id in kebab-case (`shared-kernel`, `bff`).
///
/// Rules: starts with `a-z`, continues with `a-z`, `0-9` or `-`, ends with a
/// letter or digit, at least two characters, and never contains `--`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let s = value.as_ref().trim();
        let invalid = |reason| DomainError::InvalidArtifactId {
            value: s.to_string(),
            reason,
        };

        if s.is_empty() {
            return Err(invalid("required"));
        }

        let bytes = s.as_bytes();
        let first_ok = bytes[0].is_ascii_lowercase();
        let last_ok = bytes.len() > 1
            && matches!(bytes[bytes.len() - 1], b'a'..=b'z' | b'0'..=b'9');
        let body_ok = bytes
            .iter()
            .all(|b| matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-'));

        if !(first_ok && last_ok && body_ok) {
            return Err(invalid(
                "use kebab-case: a-z, 0-9, '-' (must start with a letter)",
            ));
        }
        if s.contains("--") {
            return Err(invalid("avoid double dashes"));
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package segment derived from this id (`shared-kernel` -> `sharedkernel`).
    pub fn package_segment(&self) -> String {
        naming::to_package_safe(&self.0)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ArtifactId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ArtifactId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ArtifactId> for String {
    fn from(value: ArtifactId) -> Self {
        value.0
    }
}

// ── JavaPackage ──────────────────────────────────────────────────────────────

/// A lowercase dotted Java package with at least two segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaPackage(String);

impl JavaPackage {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let s = value.as_ref().trim();
        let segments: Vec<&str> = s.split('.').collect();

        let valid = segments.len() >= 2 && segments.iter().all(|seg| is_package_segment(seg));
        if !valid {
            return Err(DomainError::InvalidJavaPackage {
                value: s.to_string(),
            });
        }

        Ok(Self(s.to_string()))
    }

    /// Default package for a named component: `{group}.{safe-name}`.
    pub fn derive(group_id: &str, name: &ArtifactId) -> Result<Self, DomainError> {
        Self::parse(format!("{}.{}", group_id.trim(), name.package_segment()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Source directory path for this package (`com.acme.bff` -> `com/acme/bff`).
    pub fn as_path(&self) -> String {
        naming::package_to_path(&self.0)
    }
}

fn is_package_segment(seg: &str) -> bool {
    let mut chars = seg.chars();
    matches!(chars.next(), Some('a'..='z'))
        && chars.all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
}

impl fmt::Display for JavaPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JavaPackage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── JavaIdentifier ───────────────────────────────────────────────────────────

/// A module or usecase name that can be turned into a package segment and a
/// class-name prefix (`issueOtp`, `get-profile`, `login`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaIdentifier(String);

impl JavaIdentifier {
    pub fn parse(value: impl AsRef<str>) -> Result<Self, DomainError> {
        let s = value.as_ref().trim();
        let mut chars = s.chars();

        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !s.ends_with(['-', '_']);
        if !valid {
            return Err(DomainError::InvalidJavaIdentifier {
                value: s.to_string(),
            });
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase package segment (`getProfile` -> `getprofile`).
    pub fn package_segment(&self) -> String {
        naming::to_package_safe(&self.0)
    }

    /// Class-name prefix (`get-profile` -> `GetProfile`).
    pub fn pascal(&self) -> String {
        naming::to_pascal_case(&self.0)
    }

    pub fn kebab(&self) -> String {
        naming::to_kebab(&self.0)
    }
}

impl fmt::Display for JavaIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JavaIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
