//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use scaffolder_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ScaffolderError, ScaffolderResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> ScaffolderResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffolderResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> ScaffolderResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dirs(&self, path: &Path) -> ScaffolderResult<Vec<String>> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io_error(path, e, "list directory")),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffolderError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_directories_sorted() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("b-lib")).unwrap();
        std::fs::create_dir(tmp.path().join("a-lib")).unwrap();
        std::fs::write(tmp.path().join("README.md"), "x").unwrap();

        let names = LocalFilesystem::new().list_dirs(tmp.path()).unwrap();

        assert_eq!(names, vec!["a-lib", "b-lib"]);
    }

    #[test]
    fn missing_directory_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        let names = LocalFilesystem::new()
            .list_dirs(&tmp.path().join("libs"))
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn read_error_carries_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("pom.xml");

        let err = LocalFilesystem::new().read_to_string(&missing).unwrap_err();

        assert!(err.to_string().contains("pom.xml"));
    }
}
