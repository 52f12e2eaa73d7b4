//! `of-scaffolder eventbus`: wire the in-memory event bus into a service.

use tracing::instrument;

use scaffolder_core::domain::EventBusAnswers;

use crate::{
    cli::{EventbusArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

use super::{finish, generator_service, resolve_target};

#[instrument(skip_all)]
pub fn execute(
    args: EventbusArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = Prompter::new(&global);
    let generators = generator_service(&config)?;

    let (service, root_package) = resolve_target(args.target, &global.root, &generators, &prompter)?;
    let answers = EventBusAnswers {
        root: global.root.clone(),
        service,
        root_package,
    };

    output.header(&format!("Adding event bus to {}", answers.service))?;
    finish(generators.generate_eventbus(&answers), &output)
}
