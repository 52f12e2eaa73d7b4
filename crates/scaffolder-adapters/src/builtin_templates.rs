//! Built-in templates.
//!
//! Every template ships inside the binary via `include_str!`; ids are the
//! file paths under `templates/`. A local directory can replace any of them
//! by relative path (see [`override_dir`]).
//!
//! # Override resolution order
//!
//! 1. The explicit path (`templates.local_path` in the CLI config).
//! 2. **`$SCAFFOLDER_TEMPLATES_DIR`**.
//! 3. **`<executable-dir>/templates`**, when that directory exists.
//!
//! ```env
//! SCAFFOLDER_TEMPLATES_DIR=./my-templates
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use scaffolder_core::domain::Template;

/// Environment variable naming an override directory.
pub const TEMPLATES_DIR_ENV: &str = "SCAFFOLDER_TEMPLATES_DIR";

macro_rules! builtin {
    ($($id:literal),* $(,)?) => {
        &[$(($id, include_str!(concat!("../templates/", $id)))),*]
    };
}

const BUILTIN: &[(&str, &str)] = builtin![
    // ── platform ──
    "platform/root.pom.xml",
    "platform/bom.pom.xml",
    "platform/platform-starter.pom.xml",
    "platform/platform-scaffolder.json",
    "platform/gitignore",
    "platform/checkstyle.xml",
    "platform/spotbugs-exclude.xml",
    "workflows/ci.yml",
    "workflows/publish-ghcr.yml",
    "common/gitkeep",
    // ── lib ──
    "lib/pom.xml",
    "lib/README.md",
    "lib/LibTest.java",
    // ── service ──
    "service/pom.xml",
    "service/Dockerfile.native",
    "service/application.properties",
    "service/README.md",
    "service/boot/Application.java",
    "service/boot/Wiring.java",
    "service/api/HealthResource.java",
    "service/shared/contract/result/Result.java",
    "service/shared/contract/result/Success.java",
    "service/shared/contract/result/Failure.java",
    "service/shared/contract/error/Error.java",
    "service/shared/contract/error/ErrorCategory.java",
    "service/shared/contract/error/ErrorDetails.java",
    "service/shared/contract/event/EventEnvelope.java",
    "service/shared/contract/event/EventMetadata.java",
    "service/shared/contract/event/EventPublisherPort.java",
    "service/shared/contract/event/EventSubscriberPort.java",
    "service/shared/infrastructure/eventbus/inmemory/InMemoryEventBusAdapter.java",
    "service/test/ArchitectureTest.java",
    "service/test/ServiceTest.java",
    // ── usecase ──
    "usecase/service-pom.xml",
    "usecase/api/UseCaseResource.java",
    "usecase/api/request/UseCaseRequest.java",
    "usecase/api/response/UseCaseResponse.java",
    "usecase/application/UseCaseService.java",
    "usecase/domain/UseCaseModel.java",
    "usecase/domain/port/UseCaseRepositoryPort.java",
    "usecase/domain/error/UseCaseErrorCodes.java",
    "usecase/domain/error/UseCaseErrorFactory.java",
    "usecase/infrastructure/persistence/UseCaseEntity.java",
    "usecase/infrastructure/persistence/UseCasePersistenceMapper.java",
    "usecase/infrastructure/persistence/UseCaseRepositoryAdapter.java",
];

/// Every template compiled into the binary.
pub fn all_templates() -> Vec<Template> {
    BUILTIN
        .iter()
        .map(|&(id, content)| Template::new_static(id, content))
        .collect()
}

/// The override directory to use, if any.
///
/// An explicit path is returned as-is so a typo surfaces as an error when it
/// is loaded; the implicit candidates are only used when they exist.
#[instrument]
pub fn override_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using configured templates directory");
        return Some(path.to_path_buf());
    }

    if let Some(dir) = std::env::var_os(TEMPLATES_DIR_ENV).filter(|v| !v.is_empty()) {
        let dir = PathBuf::from(dir);
        debug!(path = %dir.display(), "candidate from ${}", TEMPLATES_DIR_ENV);
        return Some(dir);
    }

    exe_sibling_templates().filter(|dir| {
        let exists = dir.is_dir();
        debug!(path = %dir.display(), exists, "checked executable sibling");
        exists
    })
}

/// `<directory of current executable>/templates`, or `None` if the
/// executable path cannot be determined.
fn exe_sibling_templates() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = BUILTIN.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), BUILTIN.len());
    }

    #[test]
    fn only_gitkeep_is_empty() {
        for (id, content) in BUILTIN {
            if *id == "common/gitkeep" {
                assert!(content.is_empty());
            } else {
                assert!(!content.trim().is_empty(), "{id} is empty");
            }
        }
    }

    #[test]
    fn root_pom_carries_markers_and_pinned_versions() {
        let root = BUILTIN
            .iter()
            .find(|(id, _)| *id == "platform/root.pom.xml")
            .map(|(_, c)| *c)
            .unwrap();
        assert!(root.contains("<!-- scaffolder:modules:start -->"));
        assert!(root.contains("<quarkus.platform.version>{{QUARKUS_PLATFORM_VERSION}}</quarkus.platform.version>"));
        assert!(root.contains("<archunit.version>{{ARCHUNIT_VERSION}}</archunit.version>"));
    }

    #[test]
    fn workflows_keep_github_expressions() {
        let ci = BUILTIN
            .iter()
            .find(|(id, _)| *id == "workflows/ci.yml")
            .map(|(_, c)| *c)
            .unwrap();
        assert!(ci.contains("${{ steps.detect.outputs.services_json }}"));
        assert!(scaffolder_core::domain::entities::template::unresolved_placeholders(ci).is_empty());
    }

    #[test]
    fn explicit_override_wins() {
        let dir = override_dir(Some(Path::new("/opt/templates")));
        assert_eq!(dir, Some(PathBuf::from("/opt/templates")));
    }
}
