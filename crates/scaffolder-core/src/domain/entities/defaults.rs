use serde::{Deserialize, Serialize};

/// Versions and images a freshly bootstrapped platform starts from.
///
/// Built once at startup (config file, then `OFCX_*` environment overrides)
/// and handed to the generator service. Nothing in the core reads the
/// environment itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformDefaults {
    pub group_id: Option<String>,
    pub platform_artifact_id: String,
    pub platform_version: String,
    pub java_version: String,
    pub maven_min_version: String,
    pub quarkus_platform_group_id: String,
    pub quarkus_platform_artifact_id: String,
    pub quarkus_platform_version: String,
    pub enforcer_version: String,
    pub surefire_version: String,
    pub spotless_version: String,
    pub checkstyle_version: String,
    pub spotbugs_version: String,
    pub archunit_version: String,
    /// Derived from `java_version` when unset.
    pub mandrel_builder_image: Option<String>,
    pub docker_base_image: String,
}

impl Default for PlatformDefaults {
    fn default() -> Self {
        Self {
            group_id: None,
            platform_artifact_id: "platform".into(),
            platform_version: "1.0.0-SNAPSHOT".into(),
            java_version: "21".into(),
            maven_min_version: "3.9.0".into(),
            quarkus_platform_group_id: "io.quarkus.platform".into(),
            quarkus_platform_artifact_id: "quarkus-bom".into(),
            quarkus_platform_version: "3.19.1".into(),
            enforcer_version: "3.5.0".into(),
            surefire_version: "3.5.2".into(),
            spotless_version: "2.44.3".into(),
            checkstyle_version: "3.6.0".into(),
            spotbugs_version: "4.8.6.6".into(),
            archunit_version: "1.3.0".into(),
            mandrel_builder_image: None,
            docker_base_image: "registry.access.redhat.com/ubi9/ubi-minimal:9.5".into(),
        }
    }
}

impl PlatformDefaults {
    pub fn mandrel_builder_image(&self) -> String {
        self.mandrel_builder_image
            .clone()
            .filter(|image| !image.trim().is_empty())
            .unwrap_or_else(|| {
                format!(
                    "quay.io/quarkus/ubi-quarkus-mandrel-builder-image:23.1-java{}",
                    self.java_version
                )
            })
    }
}
