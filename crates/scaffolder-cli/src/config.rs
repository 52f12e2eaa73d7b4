//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the
//! [`PlatformDefaults`] part of it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables prefixed `OFCX_`, `__` between sections
//!    (`OFCX_PLATFORM__JAVA_VERSION=17`)
//! 3. Config file (`--config`, else `./.of-scaffolder.toml`, else the user
//!    config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use scaffolder_core::domain::PlatformDefaults;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "OFCX";

/// File name of a project-local config.
pub const LOCAL_CONFIG_FILE: &str = ".of-scaffolder.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Versions and images new platforms start from.
    pub platform: PlatformDefaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory whose files replace built-in templates by relative path.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `OFCX_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The config file in effect when `--config` is not given: a local
    /// `.of-scaffolder.toml` if present, else the user config directory.
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local;
        }
        Self::global_config_path()
    }

    /// Path of the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.of-scaffolder.toml` in the current directory.
    pub fn global_config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "openfinance", "of-scaffolder")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Directory of template overrides, if configured.
    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates.local_path.as_deref()
    }
}
