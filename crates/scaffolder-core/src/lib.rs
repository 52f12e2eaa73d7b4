//! Scaffolder Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the platform scaffolder: validated
//! generator inputs, the idempotent text mutation engine for POMs and
//! property files, and the generators that drive it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        scaffolder-cli (CLI)             │
//! │     (prompts, flags, output)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GeneratorService, FileMaterializer)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  RepoConfigSource)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   scaffolder-adapters (Infrastructure)  │
//! │ (LocalFilesystem, InMemoryStore, ...)   │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): value objects, answers, repo config,
//!   text engine (locate → render → mutate)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scaffolder_core::prelude::*;
//!
//! let service = GeneratorService::new(fs, store, renderer, repo_config, PlatformDefaults::default());
//! let report = service.generate_lib(&LibAnswers {
//!     root: "/work/platform".into(),
//!     name: ArtifactId::parse("shared-kernel")?,
//!     group_id: None,
//!     base_package: None,
//!     register_in_root_pom: None,
//!     register_in_bom: None,
//! });
//! for step in &report.steps {
//!     println!("{}", step.message());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileMaterializer, GeneratorReport, GeneratorService, StepReport, StepStatus,
        ports::{Filesystem, RepoConfigSource, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ArtifactId, Dependency, EventBusAnswers, JavaIdentifier, JavaPackage, LibAnswers,
        ModuleAnswers, PlatformAnswers, PlatformDefaults, RenderContext, RepoConfig,
        ServiceAnswers, Template, TemplateId, UsecaseAnswers,
    };
    pub use crate::error::{ScaffolderError, ScaffolderResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
