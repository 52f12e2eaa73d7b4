//! `of-scaffolder module`: add a module package to a service.

use tracing::instrument;

use scaffolder_core::domain::{JavaIdentifier, ModuleAnswers};

use crate::{
    cli::{GlobalArgs, ModuleArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

use super::{finish, generator_service, resolve_target};

#[instrument(skip_all)]
pub fn execute(args: ModuleArgs, global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = Prompter::new(&global);
    let generators = generator_service(&config)?;

    let (service, root_package) = resolve_target(args.target, &global.root, &generators, &prompter)?;
    let module = JavaIdentifier::parse(prompter.text(args.module, "MODULE", "Module name", None)?)?;

    let answers = ModuleAnswers {
        root: global.root.clone(),
        service,
        root_package,
        module,
    };

    output.header(&format!("Adding module {} to {}", answers.module, answers.service))?;
    finish(generators.generate_module(&answers), &output)
}
