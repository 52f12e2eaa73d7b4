//! In-memory doubles for generator tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, MockRepoConfigSource, TemplateRenderer, TemplateStore},
        services::generator_service::GeneratorService,
    },
    domain::{
        ArtifactId, PlatformAnswers, PlatformDefaults, RenderContext, RepoConfig, Template,
        TemplateId,
    },
    error::ScaffolderResult,
};

#[derive(Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

/// Shared map of files; clones see the same state.
#[derive(Clone, Default)]
pub(crate) struct FakeFs {
    inner: Arc<RwLock<Inner>>,
}

impl FakeFs {
    pub(crate) fn has(&self, path: &Path) -> bool {
        self.inner.read().unwrap().files.contains_key(path)
    }

    pub(crate) fn has_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().dirs.contains(path)
    }

    pub(crate) fn read(&self, path: &Path) -> String {
        self.inner
            .read()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .unwrap_or_else(|| panic!("no file at {}", path.display()))
    }

    pub(crate) fn put(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut parent = path.parent();
        while let Some(dir) = parent {
            inner.dirs.insert(dir.to_path_buf());
            parent = dir.parent();
        }
        inner.files.insert(path, content.to_string());
    }

    /// Make every later write to `path` fail.
    pub(crate) fn deny_writes(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().read_only.insert(path.into());
    }
}

impl Filesystem for FakeFs {
    fn read_to_string(&self, path: &Path) -> ScaffolderResult<String> {
        self.inner
            .read()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffolderResult<()> {
        let mut inner = self.inner.write().unwrap();
        if inner.read_only.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.dirs.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "parent directory missing".into(),
                }
                .into());
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ScaffolderResult<()> {
        let mut inner = self.inner.write().unwrap();
        let mut current = Some(path);
        while let Some(dir) = current {
            inner.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.dirs.contains(path)
    }

    fn list_dirs(&self, path: &Path) -> ScaffolderResult<Vec<String>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect())
    }
}

/// Every template renders to its id, a few `KEY=value` lines and a closing
/// `</project>` so generated POMs can be mutated afterwards.
struct EchoStore;

const ECHOED: &[&str] = &[
    "GROUP_ID",
    "PLATFORM_ARTIFACT_ID",
    "PLATFORM_VERSION",
    "ROOT_PACKAGE",
    "SERVICE_NAME",
    "LIB_NAME",
    "BASE_PACKAGE",
    "CORE_PACKAGE",
    "USECASE_PASCAL",
    "USECASE_PACKAGE",
    "MODULE",
    "DOCKER_BASE_IMAGE",
];

impl TemplateStore for EchoStore {
    fn get(&self, id: &TemplateId) -> ScaffolderResult<Template> {
        let mut body = format!("{}\n", id.as_str());
        for key in ECHOED {
            body.push_str(&format!("{key}={{{{{key}}}}}\n"));
        }
        body.push_str("</project>\n");
        Ok(Template::new_owned(id.as_str(), body))
    }

    fn list(&self) -> ScaffolderResult<Vec<TemplateId>> {
        Ok(Vec::new())
    }
}

struct ContextRenderer;

impl TemplateRenderer for ContextRenderer {
    fn render(&self, template: &Template, context: &RenderContext) -> ScaffolderResult<String> {
        Ok(context.render(template.content()))
    }
}

pub(crate) const ROOT_POM: &str = "\
<project>
  <groupId>com.acme</groupId>
  <artifactId>platform</artifactId>
  <version>1.0.0-SNAPSHOT</version>
  <modules>
    <module>bom</module>
    <module>platform-starter</module>
  </modules>
</project>
";

pub(crate) const BOM_POM: &str = "\
<project>
  <dependencyManagement>
    <dependencies>
      <dependency>
        <groupId>io.quarkus.platform</groupId>
        <artifactId>quarkus-bom</artifactId>
      </dependency>
    </dependencies>
  </dependencyManagement>
</project>
";

pub(crate) struct TestRepo {
    pub(crate) fs: FakeFs,
    config: RepoConfig,
}

impl TestRepo {
    pub(crate) fn empty() -> Self {
        Self {
            fs: FakeFs::default(),
            config: RepoConfig::default(),
        }
    }

    /// `/repo` with a root POM and BOM.
    pub(crate) fn platform() -> Self {
        Self::empty()
            .with_file("/repo/pom.xml", ROOT_POM)
            .with_file("/repo/bom/pom.xml", BOM_POM)
    }

    pub(crate) fn with_file(self, path: &str, content: &str) -> Self {
        self.fs.put(path, content);
        self
    }

    pub(crate) fn with_config(mut self, config: RepoConfig) -> Self {
        self.config = config;
        self
    }

    pub(crate) fn service(&self) -> GeneratorService {
        let config = self.config.clone();
        let mut source = MockRepoConfigSource::new();
        source.expect_load().returning(move |_| config.clone());

        GeneratorService::new(
            Box::new(self.fs.clone()),
            Box::new(EchoStore),
            Box::new(ContextRenderer),
            Box::new(source),
            PlatformDefaults::default(),
        )
    }
}

pub(crate) fn platform_answers(root: &str, add_workflows: bool) -> PlatformAnswers {
    PlatformAnswers {
        root: PathBuf::from(root),
        group_id: None,
        add_workflows,
    }
}

pub(crate) fn artifact(name: &str) -> ArtifactId {
    ArtifactId::parse(name).unwrap()
}
