//! Filesystem-based template loader.
//!
//! Reads every regular file under an override directory and turns it into a
//! [`Template`] whose id is the file's path relative to that directory. Files
//! laid out like the built-in set replace the built-in template of the same
//! id.
//!
//! # Directory layout expected
//!
//! ```text
//! my-templates/
//! ├── service/
//! │   ├── pom.xml              ← replaces built-in "service/pom.xml"
//! │   └── Dockerfile.native
//! └── workflows/
//!     └── ci.yml
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use scaffolder_core::{
    domain::Template,
    error::{Context, ScaffolderError, ScaffolderResult},
};

/// Loads template overrides from a directory tree.
///
/// # Example
///
/// ```rust,no_run
/// use scaffolder_adapters::template_loader::FilesystemTemplateLoader;
///
/// let loader = FilesystemTemplateLoader::new("./my-templates");
/// let templates = loader.load_all()?;
/// println!("Loaded {} templates", templates.len());
/// # Ok::<(), scaffolder_core::error::ScaffolderError>(())
/// ```
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Load every readable file under the directory.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the directory does not exist or
    /// cannot be walked. Single files that are not valid UTF-8 are skipped
    /// with a `WARN` log.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load_all(&self) -> ScaffolderResult<Vec<Template>> {
        if !self.templates_dir.is_dir() {
            return Err(ScaffolderError::Configuration {
                message: format!(
                    "templates directory not found: {}",
                    self.templates_dir.display()
                ),
            });
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(&self.templates_dir).min_depth(1).sort_by_file_name() {
            let entry = entry.context("directory walk error")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.templates_dir)
                .context("failed to relativise template path")?;
            let id = normalize_path(&relative.to_string_lossy());

            match fs::read_to_string(entry.path()) {
                Ok(content) => {
                    debug!(id = %id, "loaded template override");
                    templates.push(Template::new_owned(id, content));
                }
                Err(e) => {
                    // One unreadable file must not block the others.
                    warn!(path = %entry.path().display(), error = %e, "skipping template file");
                }
            }
        }

        debug!(count = templates.len(), "finished loading templates");
        Ok(templates)
    }
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
