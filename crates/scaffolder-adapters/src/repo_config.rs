//! `.platform-scaffolder.json` reader.

use std::{fs, io, path::Path};

use tracing::{debug, instrument, warn};

use scaffolder_core::{
    application::ports::RepoConfigSource,
    domain::{REPO_CONFIG_FILE, RepoConfig},
};

/// Reads the repo config as JSON from `<root>/.platform-scaffolder.json`.
///
/// A missing file is normal (fresh checkouts, tests) and yields the default
/// config silently. A file that cannot be read or parsed is logged at `WARN`
/// and also yields the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepoConfig;

impl JsonRepoConfig {
    pub fn new() -> Self {
        Self
    }
}

impl RepoConfigSource for JsonRepoConfig {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn load(&self, root: &Path) -> RepoConfig {
        let path = root.join(REPO_CONFIG_FILE);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No repo config; using defaults");
                return RepoConfig::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read repo config; using defaults");
                return RepoConfig::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid repo config; using defaults");
                RepoConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(JsonRepoConfig::new().load(dir.path()), RepoConfig::default());
    }

    #[test]
    fn invalid_json_is_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(REPO_CONFIG_FILE), "{ not json").unwrap();

        assert_eq!(JsonRepoConfig::new().load(dir.path()), RepoConfig::default());
    }

    #[test]
    fn reads_camel_case_document() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(REPO_CONFIG_FILE),
            r#"{ "groupId": "com.acme", "core": { "package": "com.acme.core" },
                 "defaults": { "service": { "internalLibs": ["shared-kernel"] } } }"#,
        )
        .unwrap();

        let config = JsonRepoConfig::new().load(dir.path());

        assert_eq!(config.non_empty_group_id(), Some("com.acme"));
        assert_eq!(config.core.package.as_deref(), Some("com.acme.core"));
        assert_eq!(config.defaults.service.internal_libs, vec!["shared-kernel"]);
    }
}
