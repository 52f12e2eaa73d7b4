// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the scaffolder.
//!
//! Pure logic only: validated names, generator inputs, repo config records,
//! and the structured-text mutation engine. All I/O goes through the ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment reads
//! - **Immutable inputs**: documents are borrowed, mutations return new text
//!
pub mod entities;
pub mod error;
pub mod naming;
pub mod text;
pub mod value_objects;

pub use entities::{
    Dependency, EventBusAnswers, LibAnswers, ModuleAnswers, PlatformAnswers, PlatformDefaults,
    REPO_CONFIG_FILE, RenderContext, RepoConfig, ServiceAnswers, Template, TemplateId,
    TemplateSource, UsecaseAnswers,
};

pub use error::{DomainError, ErrorCategory};

pub use text::{EntityKey, Fragment, InsertionOutcome, Mutation, PomCoordinates, RegionSpec};

pub use value_objects::{ArtifactId, JavaIdentifier, JavaPackage};
