//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock},
};

use tracing::{info, instrument};

use scaffolder_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Template, TemplateId},
    error::ScaffolderResult,
};

use crate::{builtin_templates, template_loader::FilesystemTemplateLoader};

/// Thread-safe in-memory template store.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateId, Template>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> ScaffolderResult<Self> {
        let store = Self::new();
        for template in builtin_templates::all_templates() {
            store.insert(template)?;
        }
        Ok(store)
    }

    /// Built-in templates, with every file under `dir` replacing the
    /// template of the same relative path.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn with_overrides(dir: &Path) -> ScaffolderResult<Self> {
        let store = Self::with_builtin()?;
        let overrides = FilesystemTemplateLoader::new(dir).load_all()?;
        info!(count = overrides.len(), "Applied template overrides");
        for template in overrides {
            store.insert(template)?;
        }
        Ok(store)
    }

    /// Add or replace a template.
    pub fn insert(&self, template: Template) -> ScaffolderResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(template.id.clone(), template);
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: &TemplateId) -> ScaffolderResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                id: id.to_string(),
            }
            .into()
        })
    }

    fn list(&self) -> ScaffolderResult<Vec<TemplateId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut ids: Vec<TemplateId> = inner.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use scaffolder_core::error::ScaffolderError;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn builtin_store_resolves_known_ids() {
        let store = InMemoryStore::with_builtin().unwrap();

        let pom = store.get(&TemplateId::from("service/pom.xml")).unwrap();

        assert!(pom.content().contains("<!-- scaffolder:deps:start -->"));
        assert!(!store.is_empty());
    }

    #[test]
    fn unknown_id_is_template_not_found() {
        let store = InMemoryStore::new();

        let err = store.get(&TemplateId::from("nope/pom.xml")).unwrap_err();

        assert!(matches!(
            err,
            ScaffolderError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn overrides_replace_by_relative_path() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("lib")).unwrap();
        std::fs::write(dir.path().join("lib/README.md"), "# custom {{LIB_NAME}}\n").unwrap();
        let builtin_count = InMemoryStore::with_builtin().unwrap().len();

        let store = InMemoryStore::with_overrides(dir.path()).unwrap();

        let readme = store.get(&TemplateId::from("lib/README.md")).unwrap();
        assert_eq!(readme.content(), "# custom {{LIB_NAME}}\n");
        assert_eq!(store.len(), builtin_count);
    }

    #[test]
    fn missing_override_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(InMemoryStore::with_overrides(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn list_is_sorted() {
        let store = InMemoryStore::new();
        store.insert(Template::new_static("b", "")).unwrap();
        store.insert(Template::new_static("a", "")).unwrap();

        let ids = store.list().unwrap();

        assert_eq!(ids, vec![TemplateId::from("a"), TemplateId::from("b")]);
    }
}
