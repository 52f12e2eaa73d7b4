//! `of-scaffolder service`: add a Quarkus service.

use tracing::{debug, instrument};

use scaffolder_core::{
    application::GeneratorService,
    domain::{ArtifactId, JavaPackage, ServiceAnswers},
};

use crate::{
    cli::{GlobalArgs, ServiceArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

use super::{finish, generator_service, opt_out};

#[instrument(skip_all)]
pub fn execute(
    args: ServiceArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let prompter = Prompter::new(&global);
    let generators = generator_service(&config)?;

    let name = ArtifactId::parse(prompter.text(args.name, "NAME", "Service name (kebab-case)", None)?)?;
    let root_package = args.root_package.map(JavaPackage::parse).transpose()?;

    let internal_libs = if args.no_libs {
        None
    } else {
        match args.libs {
            Some(libs) => Some(libs.iter().map(ArtifactId::parse).collect::<Result<Vec<_>, _>>()?),
            None => pick_libs(&generators, &global, &prompter)?,
        }
    };

    let answers = ServiceAnswers {
        root: global.root.clone(),
        name,
        group_id: args.group_id,
        root_package,
        add_workflows: opt_out(args.no_workflows),
        register_in_root_pom: opt_out(args.no_root_pom),
        autowire_internal_libs: !args.no_libs,
        internal_libs,
    };

    output.header(&format!("Adding service {}", answers.name))?;
    finish(generators.generate_service(&answers), &output)
}

/// Let the user choose among the libs on disk, preselecting the repo's
/// `defaults.service.internalLibs`. `None` keeps those defaults as they are.
fn pick_libs(
    generators: &GeneratorService,
    global: &GlobalArgs,
    prompter: &Prompter,
) -> CliResult<Option<Vec<ArtifactId>>> {
    if !prompter.is_interactive() {
        return Ok(None);
    }

    let available = generators.list_internal_libs(&global.root)?;
    if available.is_empty() {
        debug!("No internal libs to choose from");
        return Ok(None);
    }

    let defaults = generators.repo_config(&global.root).defaults.service.internal_libs;
    let preselected: Vec<bool> = available.iter().map(|lib| defaults.contains(lib)).collect();
    let chosen = prompter.select_many("Internal libs to depend on", &available, &preselected)?;

    Ok(Some(chosen.iter().map(ArtifactId::parse).collect::<Result<Vec<_>, _>>()?))
}
