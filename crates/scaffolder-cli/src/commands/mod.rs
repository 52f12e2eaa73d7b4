//! Command handlers.
//!
//! Each handler turns parsed arguments (plus prompts) into typed answers,
//! runs one generator and prints its report. No generator logic lives here.

use std::path::Path;

use tracing::debug;

use scaffolder_adapters::{
    InMemoryStore, JsonRepoConfig, LocalFilesystem, SimpleRenderer, builtin_templates::override_dir,
};
use scaffolder_core::{
    application::{GeneratorReport, GeneratorService},
    domain::{ArtifactId, JavaPackage},
};

use crate::{
    cli::ServiceTarget,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

pub mod completions;
pub mod config;
pub mod eventbus;
pub mod init;
pub mod lib;
pub mod module;
pub mod platform;
pub mod service;
pub mod usecase;

/// Wire the local adapters into a [`GeneratorService`].
pub(crate) fn generator_service(config: &AppConfig) -> CliResult<GeneratorService> {
    let store = match override_dir(config.templates_dir()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using template overrides");
            InMemoryStore::with_overrides(&dir)?
        }
        None => InMemoryStore::with_builtin()?,
    };

    Ok(GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(store),
        Box::new(SimpleRenderer::new()),
        Box::new(JsonRepoConfig::new()),
        config.platform.clone(),
    ))
}

/// Print the report, then turn a failed run into its error.
pub(crate) fn finish(report: GeneratorReport, output: &OutputManager) -> CliResult<()> {
    output.report(&report)?;
    report.into_result()?;
    Ok(())
}

/// `--no-x` switches: `Some(false)` when given, otherwise the repo default.
pub(crate) fn opt_out(flag: bool) -> Option<bool> {
    flag.then_some(false)
}

/// Service name and root package for `module`, `usecase` and `eventbus`.
pub(crate) fn resolve_target(
    target: ServiceTarget,
    root: &Path,
    generators: &GeneratorService,
    prompter: &Prompter,
) -> CliResult<(ArtifactId, Option<JavaPackage>)> {
    let service = ArtifactId::parse(prompter.text(target.service, "--service", "Service", None)?)?;

    let suggestion = match &target.root_package {
        Some(_) => None,
        None => generators.suggest_root_package(root, &service),
    };
    let root_package = prompter
        .optional(target.root_package, "Service root package", suggestion)?
        .map(JavaPackage::parse)
        .transpose()?;

    Ok((service, root_package))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opt_out_only_when_flag_given() {
        assert_eq!(opt_out(true), Some(false));
        assert_eq!(opt_out(false), None);
    }

    #[test]
    fn builtin_generator_service_builds() {
        assert!(generator_service(&AppConfig::default()).is_ok());
    }

    #[test]
    fn missing_override_dir_is_a_config_error() {
        let mut config = AppConfig::default();
        config.templates.local_path = Some("/definitely/not/here".into());

        let err = generator_service(&config).err().unwrap();

        assert_eq!(err.exit_code(), 4);
    }
}
