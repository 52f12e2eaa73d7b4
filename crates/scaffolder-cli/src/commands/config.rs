//! `of-scaffolder config`: read and write configuration values.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::debug;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&display_value(&value))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = active_path(&global);
            set_config_value(&path, &key, &value)?;
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                let value = serde_json::to_value(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.json(&value)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&active_path(&global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn active_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

/// Look up a dotted key (`platform.java_version`) in the effective config.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = Value::try_from(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    key.split('.')
        .try_fold(&root, |node, segment| node.get(segment))
        .cloned()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown or unset config key: '{key}'"),
            source: None,
        })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write `key = value` into the TOML file at `path`, keeping its other
/// entries. The result must still load as an [`AppConfig`] that has the key.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let mut table = if path.is_file() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<Table>(&text)
            .with_cli_context(|| format!("Failed to parse '{}'", path.display()))?
    } else {
        Table::new()
    };

    let value = match raw {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => Value::String(raw.to_string()),
    };
    insert_dotted(&mut table, key, value)?;

    let serialised = toml::to_string_pretty(&table).with_cli_context(|| "Failed to serialise config")?;
    let updated: AppConfig =
        toml::from_str(&serialised).with_cli_context(|| format!("Invalid value for '{key}'"))?;
    get_config_value(&updated, key)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create config directory '{}'", parent.display()))?;
    }
    std::fs::write(path, serialised)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;
    debug!(path = %path.display(), key, "Config value written");
    Ok(())
}

fn insert_dotted(table: &mut Table, key: &str, value: Value) -> CliResult<()> {
    let invalid = || CliError::InvalidInput {
        message: format!("'{key}' is not a valid config key"),
    };

    let mut segments: Vec<&str> = key.split('.').collect();
    let last = segments.pop().filter(|s| !s.is_empty()).ok_or_else(invalid)?;

    let mut node = table;
    for segment in segments {
        let entry = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        node = entry.as_table_mut().ok_or_else(invalid)?;
    }
    node.insert(last.to_string(), value);
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "platform.java_version").unwrap();
        assert_eq!(display_value(&value), cfg.platform.java_version);
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "output.no_color").unwrap();
        assert_eq!(display_value(&value), "false");
    }

    #[test]
    fn set_creates_file_and_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        set_config_value(&path, "platform.java_version", "17").unwrap();
        set_config_value(&path, "output.no_color", "true").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.platform.java_version, "17");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn set_optional_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        set_config_value(&path, "platform.group_id", "com.acme").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.platform.group_id.as_deref(), Some("com.acme"));
    }

    #[test]
    fn set_unknown_key_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let err = set_config_value(&path, "platform.nope", "x").unwrap_err();

        assert!(matches!(err, CliError::ConfigError { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn set_through_scalar_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nno_color = false\n").unwrap();

        let err = set_config_value(&path, "output.no_color.deep", "x").unwrap_err();

        assert!(matches!(err, CliError::InvalidInput { .. }));
    }
}
