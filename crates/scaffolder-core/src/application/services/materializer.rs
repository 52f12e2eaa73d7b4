//! File Materializer - applies text mutations to files on a `Filesystem`.
//!
//! Every operation is one read-modify-write. A file is written only when the
//! mutation actually changed it; a required host that does not exist is a
//! fatal error and nothing is created in its place.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        Dependency, DomainError, Fragment, InsertionOutcome, RegionSpec,
        text::{self, ensure_container},
    },
    error::{ScaffolderError, ScaffolderResult},
};

/// Which `<dependencies>` list a dependency goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyRegion {
    /// `<dependencyManagement>` of a BOM.
    Management,
    /// Top-level `<dependencies>` of a project POM.
    Project,
}

impl DependencyRegion {
    fn spec(self) -> RegionSpec {
        match self {
            Self::Management => RegionSpec::dependency_management(),
            Self::Project => RegionSpec::project_dependencies(),
        }
    }
}

pub struct FileMaterializer<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> FileMaterializer<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Register `module_path` in the `<modules>` list of `host`.
    #[instrument(skip_all, fields(host = %host.display(), module = module_path))]
    pub fn insert_module_entry(
        &self,
        host: &Path,
        module_path: &str,
    ) -> ScaffolderResult<InsertionOutcome> {
        self.apply_to_host(host, &Fragment::module(module_path), &RegionSpec::module_list())
    }

    /// Add `dependency` to the chosen dependency list of `host`.
    #[instrument(skip_all, fields(host = %host.display(), dependency = %dependency))]
    pub fn insert_dependency_entry(
        &self,
        host: &Path,
        dependency: &Dependency,
        region: DependencyRegion,
    ) -> ScaffolderResult<InsertionOutcome> {
        self.apply_to_host(host, &Fragment::dependency(dependency.clone()), &region.spec())
    }

    /// Append `lines` under a `# scaffolder:{marker}` comment, creating the
    /// file if needed. Returns `false` when the marker is already present.
    #[instrument(skip_all, fields(host = %host.display(), marker = marker))]
    pub fn append_property_lines(
        &self,
        host: &Path,
        marker: &str,
        lines: &[String],
    ) -> ScaffolderResult<bool> {
        let current = if self.fs.exists(host) {
            self.fs.read_to_string(host)?
        } else {
            String::new()
        };

        let fragment = Fragment::properties(marker, lines.iter().cloned());
        let mutation = text::mutate(
            &current,
            &fragment.entity_key(),
            &fragment,
            &RegionSpec::end_of_document(),
        );
        if !mutation.outcome.changed() {
            debug!(marker, "Properties block already present");
            return Ok(false);
        }

        self.ensure_parent(host)?;
        self.fs.write_file(host, &mutation.document)?;
        info!(marker, "Appended properties block");
        Ok(true)
    }

    /// Write `content` unless `path` exists. Never overwrites.
    pub fn write_if_absent(&self, path: &Path, content: &str) -> ScaffolderResult<bool> {
        if self.fs.exists(path) {
            debug!(path = %path.display(), "Kept existing file");
            return Ok(false);
        }
        self.ensure_parent(path)?;
        self.fs.write_file(path, content)?;
        Ok(true)
    }

    /// Create `path`; an existing file is an error.
    pub fn write_new(&self, path: &Path, content: &str) -> ScaffolderResult<()> {
        if !self.write_if_absent(path, content)? {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Add an empty `<dependencies>` section before `</project>` if the POM
    /// has none. Returns whether the file changed.
    #[instrument(skip_all, fields(host = %host.display()))]
    pub fn ensure_dependencies_section(&self, host: &Path) -> ScaffolderResult<bool> {
        let current = self.read_host(host)?;
        let updated = ensure_container(&current, "<dependencies>", "</dependencies>", "</project>", "  ")
            .map_err(|e| malformed(host, e))?;

        match updated {
            Some(doc) => {
                self.fs.write_file(host, &doc)?;
                info!("Added <dependencies> section");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn apply_to_host(
        &self,
        host: &Path,
        fragment: &Fragment,
        spec: &RegionSpec,
    ) -> ScaffolderResult<InsertionOutcome> {
        let current = self.read_host(host)?;
        let mutation = text::mutate(&current, &fragment.entity_key(), fragment, spec);

        match mutation.outcome {
            InsertionOutcome::Inserted => {
                self.fs.write_file(host, &mutation.document)?;
                info!("Inserted entry");
            }
            InsertionOutcome::AlreadyPresent => debug!("Entry already present"),
            InsertionOutcome::Unsupported => debug!("No writable region found"),
        }
        Ok(mutation.outcome)
    }

    fn read_host(&self, host: &Path) -> ScaffolderResult<String> {
        if !self.fs.exists(host) {
            return Err(ApplicationError::HostDocumentMissing {
                path: host.to_path_buf(),
            }
            .into());
        }
        self.fs.read_to_string(host)
    }

    fn ensure_parent(&self, path: &Path) -> ScaffolderResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.fs.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

fn malformed(host: &Path, e: DomainError) -> ScaffolderError {
    ApplicationError::MalformedHostDocument {
        path: host.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::ports::MockFilesystem;

    const ROOT_POM: &str = "<project>\n  <modules>\n    <module>bom</module>\n  </modules>\n</project>\n";

    fn host_with(content: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(content.to_string()));
        fs
    }

    #[test]
    fn missing_host_is_fatal_and_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();
        fs.expect_create_dir_all().never();

        let err = FileMaterializer::new(&fs)
            .insert_module_entry(Path::new("pom.xml"), "libs/a")
            .unwrap_err();

        assert!(matches!(
            err,
            ScaffolderError::Application(ApplicationError::HostDocumentMissing { .. })
        ));
    }

    #[test]
    fn inserted_entry_is_written_once() {
        let mut fs = host_with(ROOT_POM);
        fs.expect_write_file()
            .withf(|path: &Path, content: &str| {
                path == Path::new("pom.xml")
                    && content.contains("    <module>bom</module>\n    <module>libs/a</module>\n  </modules>")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = FileMaterializer::new(&fs)
            .insert_module_entry(Path::new("pom.xml"), "libs/a")
            .unwrap();
        assert_eq!(outcome, InsertionOutcome::Inserted);
    }

    #[test]
    fn present_entry_suppresses_write() {
        let mut fs = host_with(ROOT_POM);
        fs.expect_write_file().never();

        let outcome = FileMaterializer::new(&fs)
            .insert_module_entry(Path::new("pom.xml"), "bom")
            .unwrap();
        assert_eq!(outcome, InsertionOutcome::AlreadyPresent);
    }

    #[test]
    fn unsupported_host_is_soft() {
        let mut fs = host_with("<project>\n</project>\n");
        fs.expect_write_file().never();

        let outcome = FileMaterializer::new(&fs)
            .insert_dependency_entry(
                Path::new("bom/pom.xml"),
                &Dependency::new("g", "x"),
                DependencyRegion::Management,
            )
            .unwrap();
        assert_eq!(outcome, InsertionOutcome::Unsupported);
    }

    #[test]
    fn properties_file_is_created_when_absent() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_read_to_string().never();
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_: &Path, content: &str| content == "\n# scaffolder:eventbus:user\nk=v\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let wrote = FileMaterializer::new(&fs)
            .append_property_lines(
                Path::new("src/main/resources/application.properties"),
                "eventbus:user",
                &["k=v".to_string()],
            )
            .unwrap();
        assert!(wrote);
    }

    #[test]
    fn properties_marker_already_present_returns_false() {
        let mut fs = host_with("a=b\n\n# scaffolder:eventbus:user\nk=v\n");
        fs.expect_write_file().never();

        let wrote = FileMaterializer::new(&fs)
            .append_property_lines(
                Path::new("application.properties"),
                "eventbus:user",
                &["k=v".to_string()],
            )
            .unwrap();
        assert!(!wrote);
    }

    #[test]
    fn write_new_refuses_existing_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();

        let err = FileMaterializer::new(&fs)
            .write_new(Path::new("README.md"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffolderError::Application(ApplicationError::FileExists { .. })
        ));
    }

    #[test]
    fn malformed_pom_is_reported_with_path() {
        let mut fs = host_with("<project>");
        fs.expect_write_file().never();

        let err = FileMaterializer::new(&fs)
            .ensure_dependencies_section(Path::new("services/a/pom.xml"))
            .unwrap_err();
        match err {
            ScaffolderError::Application(ApplicationError::MalformedHostDocument { path, reason }) => {
                assert_eq!(path, Path::new("services/a/pom.xml"));
                assert!(reason.contains("</project>"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
