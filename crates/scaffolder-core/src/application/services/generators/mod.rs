//! One module per generator, each an `impl GeneratorService` block.

mod eventbus;
pub(crate) mod lib;
mod module;
mod platform;
mod service;
mod usecase;
