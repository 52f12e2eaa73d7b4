//! Application layer for the scaffolder.
//!
//! This layer contains:
//! - **Services**: generator orchestration and file materialization
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! text-editing rules itself. Those live in `crate::domain::text`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DependencyRegion, FileMaterializer, GeneratorReport, GeneratorService, StepReport, StepStatus,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, RepoConfigSource, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
