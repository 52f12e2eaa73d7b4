//! Infrastructure adapters for the scaffolder.
//!
//! This crate implements the ports defined in `scaffolder_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod repo_config;
pub mod template_loader;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use repo_config::JsonRepoConfig;
pub use template_store::InMemoryStore;
