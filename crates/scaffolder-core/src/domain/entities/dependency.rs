use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::DomainError;

/// Maven dependency coordinates as they appear in repo config and POMs.
///
/// Deserialized coordinates are trimmed; an empty `groupId` or `artifactId`
/// is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDependency")]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            scope: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Use `scope` unless one is already set.
    pub fn or_scope(mut self, scope: &str) -> Self {
        if self.scope.as_deref().is_none_or(|s| s.trim().is_empty()) {
            self.scope = Some(scope.to_string());
        }
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDependency {
    group_id: String,
    artifact_id: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

impl TryFrom<RawDependency> for Dependency {
    type Error = DomainError;

    fn try_from(raw: RawDependency) -> Result<Self, Self::Error> {
        let group_id = raw.group_id.trim();
        if group_id.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "groupId" });
        }
        let artifact_id = raw.artifact_id.trim();
        if artifact_id.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "artifactId" });
        }

        let optional = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Ok(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: optional(raw.version),
            scope: optional(raw.scope),
        })
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}
