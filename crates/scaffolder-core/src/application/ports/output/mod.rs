//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `scaffolder-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RenderContext, RepoConfig, Template, TemplateId};
use crate::error::ScaffolderResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scaffolder_adapters::filesystem::LocalFilesystem` (production)
/// - `scaffolder_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `write_file` does not create parent directories; callers create them first.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ScaffolderResult<String>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> ScaffolderResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffolderResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, sorted. A missing
    /// directory yields an empty list.
    fn list_dirs(&self, path: &Path) -> ScaffolderResult<Vec<String>>;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `scaffolder_adapters::template_store::InMemoryStore` (built-in templates
///   plus optional on-disk overrides)
pub trait TemplateStore: Send + Sync {
    /// Get a specific template by ID.
    fn get(&self, id: &TemplateId) -> ScaffolderResult<Template>;

    /// List all available template ids.
    fn list(&self) -> ScaffolderResult<Vec<TemplateId>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `scaffolder_adapters::renderer::SimpleRenderer` (variable substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render a template's content with the given context.
    fn render(&self, template: &Template, context: &RenderContext) -> ScaffolderResult<String>;
}

/// Port for reading `.platform-scaffolder.json`.
///
/// Implemented by:
/// - `scaffolder_adapters::repo_config::JsonRepoConfig`
#[cfg_attr(test, mockall::automock)]
pub trait RepoConfigSource: Send + Sync {
    /// Repo config for the repository at `root`. Never fails: a missing or
    /// unreadable file yields `RepoConfig::default()`.
    fn load(&self, root: &Path) -> RepoConfig;
}
