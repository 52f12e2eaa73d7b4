//! Port definitions (interfaces) for hexagonal architecture.

pub mod output;

#[cfg(test)]
pub use output::{MockFilesystem, MockRepoConfigSource};
pub use output::{Filesystem, RepoConfigSource, TemplateRenderer, TemplateStore};
