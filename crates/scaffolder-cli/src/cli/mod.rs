//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "of-scaffolder",
    bin_name = "of-scaffolder",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Idempotent scaffolding for Maven/Quarkus platform repositories",
    long_about = "of-scaffolder bootstraps a multi-module Maven platform and adds \
                  libs, services, modules and usecases to it. Every run can be \
                  repeated: existing files are kept and registrations in the root \
                  POM, the BOM and property files are only added once.",
    after_help = "EXAMPLES:\n\
        \x20 of-scaffolder platform --group-id com.acme\n\
        \x20 of-scaffolder lib shared-kernel\n\
        \x20 of-scaffolder service bff --libs shared-kernel\n\
        \x20 of-scaffolder usecase getProfile --service bff --module profile\n\
        \x20 of-scaffolder completions bash > /usr/share/bash-completion/completions/of-scaffolder",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap a new platform repository.
    #[command(
        about = "Create a new platform repository",
        after_help = "EXAMPLES:\n\
            \x20 of-scaffolder --root ./platform platform --group-id com.acme\n\
            \x20 of-scaffolder platform --no-workflows"
    )]
    Platform(PlatformArgs),

    /// Add an internal library under `libs/`.
    #[command(
        about = "Add an internal library",
        after_help = "EXAMPLES:\n\
            \x20 of-scaffolder lib shared-kernel\n\
            \x20 of-scaffolder lib observability --base-package com.acme.obs --no-bom"
    )]
    Lib(LibArgs),

    /// Add a Quarkus service under `services/`.
    #[command(
        visible_alias = "svc",
        about = "Add a service",
        after_help = "EXAMPLES:\n\
            \x20 of-scaffolder service bff\n\
            \x20 of-scaffolder service orders --libs shared-kernel,observability\n\
            \x20 of-scaffolder service payments --no-libs --no-workflows"
    )]
    Service(ServiceArgs),

    /// Add a business module package to a service.
    #[command(about = "Add a module to a service")]
    Module(ModuleArgs),

    /// Add a usecase slice to a service module.
    #[command(
        visible_alias = "uc",
        about = "Add a usecase to a service module",
        after_help = "EXAMPLES:\n\
            \x20 of-scaffolder usecase getProfile --service bff --module profile"
    )]
    Usecase(UsecaseArgs),

    /// Wire the in-memory event bus into a service.
    #[command(about = "Add the in-memory event bus to a service")]
    Eventbus(EventbusArgs),

    /// Initialise an of-scaffolder configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 of-scaffolder init           # user config directory\n\
            \x20 of-scaffolder init --local   # .of-scaffolder.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 of-scaffolder completions bash > ~/.local/share/bash-completion/completions/of-scaffolder\n\
            \x20 of-scaffolder completions zsh  > ~/.zfunc/_of-scaffolder"
    )]
    Completions(CompletionsArgs),

    /// Inspect and edit the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 of-scaffolder config get platform.quarkus_platform_version\n\
            \x20 of-scaffolder config set platform.java_version 17\n\
            \x20 of-scaffolder config list"
    )]
    Config(ConfigCommands),
}

// ── platform ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PlatformArgs {
    /// Maven groupId of the platform.
    #[arg(long = "group-id", value_name = "GROUP_ID")]
    pub group_id: Option<String>,

    /// Do not add the CI workflows.
    #[arg(long = "no-workflows")]
    pub no_workflows: bool,
}

// ── lib ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LibArgs {
    /// Artifact id of the library (kebab-case).
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Override the groupId (default: repo config, then root POM).
    #[arg(long = "group-id", value_name = "GROUP_ID")]
    pub group_id: Option<String>,

    /// Base Java package (default: `<groupId>.<name>`).
    #[arg(long = "base-package", value_name = "PACKAGE")]
    pub base_package: Option<String>,

    /// Do not register the lib in the root POM modules.
    #[arg(long = "no-root-pom")]
    pub no_root_pom: bool,

    /// Do not register the lib in the BOM.
    #[arg(long = "no-bom")]
    pub no_bom: bool,
}

// ── service ───────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Artifact id of the service (kebab-case).
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Override the groupId (default: repo config, then root POM).
    #[arg(long = "group-id", value_name = "GROUP_ID")]
    pub group_id: Option<String>,

    /// Root Java package (default: `<groupId>.<name>`).
    #[arg(long = "root-package", value_name = "PACKAGE")]
    pub root_package: Option<String>,

    /// Internal libs to depend on (default: `defaults.service.internalLibs`).
    #[arg(long = "libs", value_name = "LIB", value_delimiter = ',', conflicts_with = "no_libs")]
    pub libs: Option<Vec<String>>,

    /// Do not add any internal lib dependency.
    #[arg(long = "no-libs")]
    pub no_libs: bool,

    /// Do not add the CI workflows.
    #[arg(long = "no-workflows")]
    pub no_workflows: bool,

    /// Do not register the service in the root POM modules.
    #[arg(long = "no-root-pom")]
    pub no_root_pom: bool,
}

// ── module / usecase / eventbus ───────────────────────────────────────────────

/// Selects an existing service.
#[derive(Debug, Args)]
pub struct ServiceTarget {
    /// Service the change applies to.
    #[arg(short = 's', long = "service", value_name = "SERVICE")]
    pub service: Option<String>,

    /// Root Java package of the service (default: read from its POM).
    #[arg(long = "root-package", value_name = "PACKAGE")]
    pub root_package: Option<String>,
}

#[derive(Debug, Args)]
pub struct ModuleArgs {
    /// Module name (Java identifier).
    #[arg(value_name = "MODULE")]
    pub module: Option<String>,

    #[command(flatten)]
    pub target: ServiceTarget,
}

#[derive(Debug, Args)]
pub struct UsecaseArgs {
    /// Usecase name (Java identifier, e.g. `getProfile`).
    #[arg(value_name = "USECASE")]
    pub usecase: Option<String>,

    /// Module the usecase belongs to.
    #[arg(short = 'm', long = "module", value_name = "MODULE")]
    pub module: Option<String>,

    #[command(flatten)]
    pub target: ServiceTarget,
}

#[derive(Debug, Args)]
pub struct EventbusArgs {
    #[command(flatten)]
    pub target: ServiceTarget,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.of-scaffolder.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `of-scaffolder config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `platform.java_version`.
        key: String,
    },
    /// Set a key in the active configuration file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_service_with_lib_list() {
        let cli = Cli::parse_from(["of-scaffolder", "service", "bff", "--libs", "a,b"]);
        let Commands::Service(args) = cli.command else {
            panic!("expected service command");
        };
        assert_eq!(args.name.as_deref(), Some("bff"));
        assert_eq!(args.libs, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn libs_and_no_libs_conflict() {
        let result = Cli::try_parse_from(["of-scaffolder", "service", "bff", "--libs", "a", "--no-libs"]);
        assert!(result.is_err());
    }

    #[test]
    fn root_is_global_and_defaults_to_cwd() {
        let cli = Cli::parse_from(["of-scaffolder", "lib", "x"]);
        assert_eq!(cli.global.root, std::path::PathBuf::from("."));

        let cli = Cli::parse_from(["of-scaffolder", "lib", "x", "--root", "/tmp/p"]);
        assert_eq!(cli.global.root, std::path::PathBuf::from("/tmp/p"));
    }

    #[test]
    fn usecase_alias_and_flags() {
        let cli = Cli::parse_from(["of-scaffolder", "uc", "getProfile", "-s", "bff", "-m", "profile"]);
        let Commands::Usecase(args) = cli.command else {
            panic!("expected usecase command");
        };
        assert_eq!(args.usecase.as_deref(), Some("getProfile"));
        assert_eq!(args.module.as_deref(), Some("profile"));
        assert_eq!(args.target.service.as_deref(), Some("bff"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["of-scaffolder", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
