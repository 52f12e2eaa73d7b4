//! `of-scaffolder usecase`: add a usecase slice to a service module.

use tracing::instrument;

use scaffolder_core::domain::{JavaIdentifier, UsecaseAnswers};

use crate::{
    cli::{GlobalArgs, UsecaseArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

use super::{finish, generator_service, resolve_target};

#[instrument(skip_all)]
pub fn execute(
    args: UsecaseArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = Prompter::new(&global);
    let generators = generator_service(&config)?;

    let (service, root_package) = resolve_target(args.target, &global.root, &generators, &prompter)?;
    let module = JavaIdentifier::parse(prompter.text(args.module, "--module", "Module name", None)?)?;
    let usecase = JavaIdentifier::parse(prompter.text(
        args.usecase,
        "USECASE",
        "Usecase name (e.g. getProfile)",
        None,
    )?)?;

    let answers = UsecaseAnswers {
        root: global.root.clone(),
        service,
        root_package,
        module,
        usecase,
    };

    output.header(&format!(
        "Adding usecase {} to {}/{}",
        answers.usecase, answers.service, answers.module
    ))?;
    finish(generators.generate_usecase(&answers), &output)
}
