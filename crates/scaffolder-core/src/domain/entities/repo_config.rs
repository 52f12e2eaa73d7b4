//! Per-repository defaults stored in `.platform-scaffolder.json`.
//!
//! Every field is optional: a missing or unreadable file yields
//! `RepoConfig::default()` and generators fall back to their own defaults or
//! fail with a pointer to the key they need.

use serde::{Deserialize, Serialize};

use super::Dependency;

/// File name of the repo config, relative to the repo root.
pub const REPO_CONFIG_FILE: &str = ".platform-scaffolder.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoConfig {
    pub schema_version: Option<u32>,
    pub group_id: Option<String>,
    pub platform_artifact_id: Option<String>,
    pub platform_version: Option<String>,
    pub core: CoreConfig,
    pub defaults: GeneratorDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub package: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    pub lib: LibDefaults,
    pub service: ServiceDefaults,
    pub usecase: UsecaseDefaults,
    pub eventbus: EventBusDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibDefaults {
    pub register_in_root_pom: Option<bool>,
    pub register_in_bom: Option<bool>,
    pub test_dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDefaults {
    pub add_workflows: Option<bool>,
    pub register_in_root_pom: Option<bool>,
    pub internal_libs: Vec<String>,
    pub docker_base_image: Option<String>,
    /// Artifact ids under `io.quarkus`.
    pub quarkus_extensions: Vec<String>,
    pub test_dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsecaseDefaults {
    pub pom: PomDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PomDefaults {
    pub dependencies: Vec<Dependency>,
    pub test_dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusDefaults {
    pub dependencies: Vec<Dependency>,
    /// `key=value` lines appended to the service's `application.properties`.
    pub properties: Vec<String>,
}

impl RepoConfig {
    pub fn register_lib_in_root_pom(&self) -> bool {
        self.defaults.lib.register_in_root_pom.unwrap_or(true)
    }

    pub fn register_lib_in_bom(&self) -> bool {
        self.defaults.lib.register_in_bom.unwrap_or(true)
    }

    pub fn add_service_workflows(&self) -> bool {
        self.defaults.service.add_workflows.unwrap_or(true)
    }

    pub fn register_service_in_root_pom(&self) -> bool {
        self.defaults.service.register_in_root_pom.unwrap_or(true)
    }

    pub fn non_empty_group_id(&self) -> Option<&str> {
        self.group_id.as_deref().filter(|g| !g.trim().is_empty())
    }
}
