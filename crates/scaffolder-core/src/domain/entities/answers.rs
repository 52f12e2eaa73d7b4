//! Typed, validated inputs for each generator.
//!
//! `None` means "resolve from the repo": repo config first, then the POMs on
//! disk, then the built-in default.

use std::path::PathBuf;

use crate::domain::value_objects::{ArtifactId, JavaIdentifier, JavaPackage};

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformAnswers {
    /// Directory to create the platform in. Must not already hold a `pom.xml`.
    pub root: PathBuf,
    /// Overrides `PlatformDefaults::group_id`.
    pub group_id: Option<String>,
    pub add_workflows: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibAnswers {
    pub root: PathBuf,
    pub name: ArtifactId,
    pub group_id: Option<String>,
    pub base_package: Option<JavaPackage>,
    pub register_in_root_pom: Option<bool>,
    pub register_in_bom: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceAnswers {
    pub root: PathBuf,
    pub name: ArtifactId,
    pub group_id: Option<String>,
    pub root_package: Option<JavaPackage>,
    pub add_workflows: Option<bool>,
    pub register_in_root_pom: Option<bool>,
    /// `false` skips internal-lib dependencies entirely.
    pub autowire_internal_libs: bool,
    /// Explicit selection; `None` uses `defaults.service.internalLibs`.
    pub internal_libs: Option<Vec<ArtifactId>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleAnswers {
    pub root: PathBuf,
    pub service: ArtifactId,
    pub root_package: Option<JavaPackage>,
    pub module: JavaIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsecaseAnswers {
    pub root: PathBuf,
    pub service: ArtifactId,
    pub root_package: Option<JavaPackage>,
    pub module: JavaIdentifier,
    pub usecase: JavaIdentifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventBusAnswers {
    pub root: PathBuf,
    pub service: ArtifactId,
    pub root_package: Option<JavaPackage>,
}
