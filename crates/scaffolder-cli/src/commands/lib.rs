//! `of-scaffolder lib`: add an internal library.

use tracing::instrument;

use scaffolder_core::domain::{ArtifactId, JavaPackage, LibAnswers};

use crate::{
    cli::{GlobalArgs, LibArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

use super::{finish, generator_service, opt_out};

#[instrument(skip_all)]
pub fn execute(args: LibArgs, global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = Prompter::new(&global);

    let name = ArtifactId::parse(prompter.text(args.name, "NAME", "Lib name (kebab-case)", None)?)?;
    let base_package = args.base_package.map(JavaPackage::parse).transpose()?;

    let answers = LibAnswers {
        root: global.root.clone(),
        name,
        group_id: args.group_id,
        base_package,
        register_in_root_pom: opt_out(args.no_root_pom),
        register_in_bom: opt_out(args.no_bom),
    };

    let generators = generator_service(&config)?;
    output.header(&format!("Adding lib {}", answers.name))?;
    finish(generators.generate_lib(&answers), &output)
}
