//! `of-scaffolder platform`: bootstrap a platform repository.

use tracing::{info, instrument};

use scaffolder_core::domain::PlatformAnswers;

use crate::{
    cli::{GlobalArgs, PlatformArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

use super::{finish, generator_service};

#[instrument(skip_all, fields(root = %global.root.display()))]
pub fn execute(
    args: PlatformArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = Prompter::new(&global);

    let group_id = prompter.optional(args.group_id, "Maven groupId", config.platform.group_id.clone())?;
    let add_workflows = !args.no_workflows && prompter.confirm("Add GitHub workflows?", true)?;

    let answers = PlatformAnswers {
        root: global.root.clone(),
        group_id,
        add_workflows,
    };

    let generators = generator_service(&config)?;
    output.header(&format!("Creating platform in {}", global.root.display()))?;
    finish(generators.generate_platform(&answers), &output)?;
    info!("Platform generated");

    output.info("Next: of-scaffolder lib <name>, then of-scaffolder service <name>")?;
    Ok(())
}
