//! Generator Service - main application orchestrator.
//!
//! Owns the driven ports and the platform defaults. Each generator lives in
//! its own module under `generators/` as an `impl GeneratorService` block and
//! produces a [`GeneratorReport`](super::report::GeneratorReport).

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, RepoConfigSource, TemplateRenderer, TemplateStore},
        services::materializer::FileMaterializer,
    },
    domain::{
        ArtifactId, Dependency, Fragment, InsertionOutcome, JavaPackage, PlatformDefaults, PomCoordinates,
        RenderContext, RepoConfig, TemplateId, naming, text::read_tag_value,
    },
    error::ScaffolderResult,
};

/// Runs generators against a repository through the configured adapters.
pub struct GeneratorService {
    filesystem: Box<dyn Filesystem>,
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    repo_config: Box<dyn RepoConfigSource>,
    defaults: PlatformDefaults,
}

impl GeneratorService {
    /// Create a generator service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let service = GeneratorService::new(
    ///     Box::new(LocalFilesystem::new()),
    ///     Box::new(InMemoryStore::with_builtin()?),
    ///     Box::new(SimpleRenderer::new()),
    ///     Box::new(JsonRepoConfig::new()),
    ///     PlatformDefaults::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        repo_config: Box<dyn RepoConfigSource>,
        defaults: PlatformDefaults,
    ) -> Self {
        Self {
            filesystem,
            store,
            renderer,
            repo_config,
            defaults,
        }
    }

    pub fn defaults(&self) -> &PlatformDefaults {
        &self.defaults
    }

    /// Repo config of the repository at `root` (empty when absent).
    pub fn repo_config(&self, root: &Path) -> RepoConfig {
        self.repo_config.load(root)
    }

    /// Whether `root` holds an aggregator `pom.xml`.
    pub fn is_platform_root(&self, root: &Path) -> bool {
        self.filesystem.exists(&root.join("pom.xml"))
    }

    /// Libraries under `libs/` that have their own `pom.xml`.
    pub fn list_internal_libs(&self, root: &Path) -> ScaffolderResult<Vec<String>> {
        let libs_dir = root.join("libs");
        Ok(self
            .filesystem
            .list_dirs(&libs_dir)?
            .into_iter()
            .filter(|name| self.filesystem.exists(&libs_dir.join(name).join("pom.xml")))
            .collect())
    }

    /// Best guess for a service's root package: `<root.package>` from its POM,
    /// else `{groupId}.{safe-name}` using the repo config or root POM.
    pub fn suggest_root_package(&self, root: &Path, service: &ArtifactId) -> Option<String> {
        let service_pom = service_dir(root, service).join("pom.xml");
        if let Some(pom) = self.read_optional(&service_pom) {
            if let Some(pkg) = read_tag_value(&pom, "root.package") {
                return Some(pkg.to_string());
            }
        }

        let group = self
            .repo_config(root)
            .non_empty_group_id()
            .map(str::to_string)
            .or_else(|| self.read_coordinates(&root.join("pom.xml")).group_id)?;
        Some(format!("{}.{}", group, service.package_segment()))
    }

    // -------------------------------------------------------------------------
    // Helpers shared by the generators
    // -------------------------------------------------------------------------

    pub(crate) fn fs(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    pub(crate) fn materializer(&self) -> FileMaterializer<'_> {
        FileMaterializer::new(self.filesystem.as_ref())
    }

    /// Render template `id` with `ctx`.
    pub(crate) fn render(&self, id: &str, ctx: &RenderContext) -> ScaffolderResult<String> {
        let template = self.store.get(&TemplateId::new(id))?;
        self.renderer.render(&template, ctx)
    }

    /// Template text without substitution (workflow files carry `${{ }}`).
    pub(crate) fn raw(&self, id: &str) -> ScaffolderResult<String> {
        Ok(self.store.get(&TemplateId::new(id))?.content().to_string())
    }

    /// Render `id` into `path`, failing if `path` already exists.
    pub(crate) fn add(
        &self,
        root: &Path,
        path: &Path,
        id: &str,
        ctx: &RenderContext,
    ) -> ScaffolderResult<String> {
        let content = self.render(id, ctx)?;
        self.materializer().write_new(path, &content)?;
        Ok(format!("Added {}", display_relative(root, path)))
    }

    /// Render `id` into `path` unless it exists. Returns whether it wrote.
    pub(crate) fn add_if_absent(
        &self,
        path: &Path,
        id: &str,
        ctx: &RenderContext,
    ) -> ScaffolderResult<bool> {
        if self.filesystem.exists(path) {
            return Ok(false);
        }
        let content = self.render(id, ctx)?;
        self.materializer().write_if_absent(path, &content)
    }

    /// Coordinates of a POM; a missing or unreadable POM yields nothing.
    pub(crate) fn read_coordinates(&self, pom: &Path) -> PomCoordinates {
        self.read_optional(pom)
            .map(|doc| PomCoordinates::read(&doc))
            .unwrap_or_default()
    }

    fn read_optional(&self, path: &Path) -> Option<String> {
        if !self.filesystem.exists(path) {
            return None;
        }
        match self.filesystem.read_to_string(path) {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read file");
                None
            }
        }
    }

    /// Write both CI workflows if they are not there yet.
    pub(crate) fn add_workflows(&self, root: &Path) -> ScaffolderResult<String> {
        let dir = root.join(".github").join("workflows");
        let materializer = self.materializer();
        for name in ["ci.yml", "publish-ghcr.yml"] {
            let content = self.raw(&format!("workflows/{name}"))?;
            if !materializer.write_if_absent(&dir.join(name), &content)? {
                debug!(workflow = name, "Workflow already present");
            }
        }
        Ok("Added workflows (if absent)".into())
    }

    /// Register `module_path` in the root POM and describe what happened.
    pub(crate) fn register_module(&self, root: &Path, module_path: &str) -> ScaffolderResult<String> {
        let outcome = self
            .materializer()
            .insert_module_entry(&root.join("pom.xml"), module_path)?;
        Ok(match outcome {
            InsertionOutcome::Inserted => format!("Registered module: {module_path}"),
            InsertionOutcome::AlreadyPresent => format!("Module already registered: {module_path}"),
            InsertionOutcome::Unsupported => {
                "Skipped root pom module registration (no <modules>)".into()
            }
        })
    }

    /// Service root package: explicit answer, else the service POM's
    /// `<root.package>`, else `{groupId}.{safe-name}`.
    pub(crate) fn resolve_root_package(
        &self,
        root: &Path,
        service: &ArtifactId,
        explicit: Option<&JavaPackage>,
    ) -> ScaffolderResult<JavaPackage> {
        if let Some(pkg) = explicit {
            return Ok(pkg.clone());
        }
        let guess = self.suggest_root_package(root, service).ok_or_else(|| {
            ApplicationError::UnresolvedCoordinates {
                what: "groupId",
                path: root.join("pom.xml"),
            }
        })?;
        Ok(JavaPackage::parse(guess)?)
    }

    /// Fail unless the service has a POM.
    pub(crate) fn require_service(&self, root: &Path, service: &ArtifactId) -> ScaffolderResult<PathBuf> {
        let dir = service_dir(root, service);
        if !self.filesystem.exists(&dir.join("pom.xml")) {
            return Err(ApplicationError::NotFound {
                what: "Service",
                path: dir,
            }
            .into());
        }
        Ok(dir)
    }

    /// Variables every template may use.
    pub(crate) fn base_context(&self) -> RenderContext {
        let d = &self.defaults;
        RenderContext::new()
            .with_variable("PLATFORM_ARTIFACT_ID", d.platform_artifact_id.as_str())
            .with_variable("PLATFORM_VERSION", d.platform_version.as_str())
            .with_variable("JAVA_VERSION", d.java_version.as_str())
            .with_variable("MAVEN_MIN_VERSION", d.maven_min_version.as_str())
            .with_variable("QUARKUS_PLATFORM_GROUP_ID", d.quarkus_platform_group_id.as_str())
            .with_variable("QUARKUS_PLATFORM_ARTIFACT_ID", d.quarkus_platform_artifact_id.as_str())
            .with_variable("QUARKUS_PLATFORM_VERSION", d.quarkus_platform_version.as_str())
            .with_variable("ENFORCER_VERSION", d.enforcer_version.as_str())
            .with_variable("SUREFIRE_VERSION", d.surefire_version.as_str())
            .with_variable("SPOTLESS_VERSION", d.spotless_version.as_str())
            .with_variable("CHECKSTYLE_VERSION", d.checkstyle_version.as_str())
            .with_variable("SPOTBUGS_VERSION", d.spotbugs_version.as_str())
            .with_variable("ARCHUNIT_VERSION", d.archunit_version.as_str())
            .with_variable("MANDREL_BUILDER_IMAGE", d.mandrel_builder_image())
            .with_variable("DOCKER_BASE_IMAGE", d.docker_base_image.as_str())
    }
}

pub(crate) fn service_dir(root: &Path, service: &ArtifactId) -> PathBuf {
    root.join("services").join(service.as_str())
}

/// Source root for a package under `base` (`src/main/java/com/acme/bff`).
pub(crate) fn java_root(base: &Path, source_set: &str, package: &JavaPackage) -> PathBuf {
    base.join("src")
        .join(source_set)
        .join("java")
        .join(naming::package_to_path(package.as_str()))
}

pub(crate) fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Dependency blocks for a template placeholder, one per entry.
pub(crate) fn render_dependencies(dependencies: &[Dependency], indent: &str) -> String {
    dependencies
        .iter()
        .map(|d| Fragment::dependency(d.clone()).render(indent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{TestRepo, artifact};

    #[test]
    fn internal_libs_need_their_own_pom() {
        let repo = TestRepo::platform()
            .with_file("/repo/libs/shared-kernel/pom.xml", "<project/>")
            .with_file("/repo/libs/scratch/notes.txt", "");

        let libs = repo.service().list_internal_libs(Path::new("/repo")).unwrap();

        assert_eq!(libs, vec!["shared-kernel".to_string()]);
    }

    #[test]
    fn root_package_prefers_service_pom() {
        let repo = TestRepo::platform().with_file(
            "/repo/services/bff/pom.xml",
            "<properties>\n  <root.package>org.example.edge</root.package>\n</properties>",
        );

        let suggested = repo
            .service()
            .suggest_root_package(Path::new("/repo"), &artifact("bff"));

        assert_eq!(suggested.as_deref(), Some("org.example.edge"));
    }

    #[test]
    fn root_package_falls_back_to_group_and_safe_name() {
        let repo = TestRepo::platform();

        let suggested = repo
            .service()
            .suggest_root_package(Path::new("/repo"), &artifact("user-profile"));

        assert_eq!(suggested.as_deref(), Some("com.acme.userprofile"));
    }

    #[test]
    fn dependency_list_renders_one_block_per_entry() {
        let rendered = render_dependencies(
            &[
                Dependency::new("io.quarkus", "quarkus-rest"),
                Dependency::new("io.quarkus", "quarkus-junit5").with_scope("test"),
            ],
            "    ",
        );

        assert_eq!(rendered.matches("    <dependency>\n").count(), 2);
        assert!(rendered.ends_with("      <scope>test</scope>\n    </dependency>\n"));
    }
}
