//! Client store adapters.
//!
//! [`MemoryClientStore`] keeps values for the life of the process.
//! [`JsonFileClientStore`] persists the client-local key/value map as a single
//! JSON object of string values, e.g. `{"LOG_LEVEL":"debug"}`. The file is
//! re-read on every access so edits made while the process runs are picked up
//! by the next log call.

use scoped_log_ports::{ClientStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

type Items = BTreeMap<String, String>;

/// Client store held in process memory.
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    items: RwLock<Items>,
}

impl MemoryClientStore {
    /// Store seeded with `items`.
    #[must_use]
    pub const fn with_items(items: Items) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryClientStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::with_items(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl ClientStore for MemoryClientStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.items.read().map_err(|_| lock_poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| lock_poisoned())?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().map_err(|_| lock_poisoned())?;
        items.remove(key);
        Ok(())
    }
}

fn lock_poisoned() -> StoreError {
    StoreError::Unavailable {
        reason: "memory client store lock poisoned".into(),
    }
}

/// Client store persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileClientStore {
    path: PathBuf,
}

impl JsonFileClientStore {
    /// Store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<Items, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Items::new()),
            Err(error) => return Err(StoreError::from(error)),
        };
        if text.trim().is_empty() {
            return Ok(Items::new());
        }
        serde_json::from_str(&text).map_err(|error| StoreError::Malformed {
            reason: format!("{}: {error}", self.path.display()).into_boxed_str(),
        })
    }

    fn write_items(&self, items: &Items) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_string_pretty(items).map_err(|error| StoreError::Malformed {
            reason: error.to_string().into_boxed_str(),
        })?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, encoded)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl ClientStore for JsonFileClientStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self.read_items()?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write_items(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_collects_from_pairs() -> Result<(), StoreError> {
        let store: MemoryClientStore = [("LOG_LEVEL", "error")].into_iter().collect();
        assert_eq!(store.get_item("LOG_LEVEL")?.as_deref(), Some("error"));
        assert_eq!(store.get_item("theme")?, None);
        Ok(())
    }

    #[test]
    fn memory_store_round_trips() -> Result<(), StoreError> {
        let store = MemoryClientStore::with_items(Items::from([(
            "LOG_LEVEL".to_string(),
            "warn".to_string(),
        )]));
        assert_eq!(store.get_item("LOG_LEVEL")?.as_deref(), Some("warn"));

        store.set_item("LOG_LEVEL", "debug")?;
        assert_eq!(store.get_item("LOG_LEVEL")?.as_deref(), Some("debug"));

        store.remove_item("LOG_LEVEL")?;
        store.remove_item("LOG_LEVEL")?;
        assert_eq!(store.get_item("LOG_LEVEL")?, None);
        Ok(())
    }

    #[test]
    fn missing_file_reads_as_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let store = JsonFileClientStore::new(dir.path().join("storage.json"));
        assert_eq!(store.get_item("LOG_LEVEL")?, None);
        store.remove_item("LOG_LEVEL")?;
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    fn set_get_remove_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let store = JsonFileClientStore::new(dir.path().join("nested/state/storage.json"));

        store.set_item("LOG_LEVEL", "debug")?;
        store.set_item("theme", "dark")?;
        assert_eq!(store.get_item("LOG_LEVEL")?.as_deref(), Some("debug"));

        store.remove_item("LOG_LEVEL")?;
        assert_eq!(store.get_item("LOG_LEVEL")?, None);
        assert_eq!(store.get_item("theme")?.as_deref(), Some("dark"));
        Ok(())
    }

    #[test]
    fn external_edits_are_observed() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        let store = JsonFileClientStore::new(&path);
        store.set_item("LOG_LEVEL", "warn")?;

        fs::write(&path, r#"{"LOG_LEVEL":"error"}"#)?;
        assert_eq!(store.get_item("LOG_LEVEL")?.as_deref(), Some("error"));
        Ok(())
    }

    #[test]
    fn malformed_contents_are_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json")?;
        let store = JsonFileClientStore::new(&path);

        let error = store.get_item("LOG_LEVEL").err();
        assert!(matches!(error, Some(StoreError::Malformed { .. })));

        fs::write(&path, r#"{"LOG_LEVEL":3}"#)?;
        let error = store.set_item("LOG_LEVEL", "info").err();
        assert!(matches!(error, Some(StoreError::Malformed { .. })));
        Ok(())
    }

    #[test]
    fn blank_file_reads_as_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "  \n")?;
        let store = JsonFileClientStore::new(&path);
        assert_eq!(store.get_item("LOG_LEVEL")?, None);
        Ok(())
    }
}
