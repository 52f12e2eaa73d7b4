//! Application services - orchestrate use cases.
//!
//! `GeneratorService` runs generators; `FileMaterializer` applies the text
//! engine to files on the `Filesystem` port.

pub mod generator_service;
mod generators;
pub mod materializer;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;

pub use generator_service::GeneratorService;
pub use materializer::{DependencyRegion, FileMaterializer};
pub use report::{GeneratorReport, StepReport, StepStatus};
