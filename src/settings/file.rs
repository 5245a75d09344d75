//! File-backed settings store

use super::{ChangeListeners, Edit, SettingValue, SettingsStore, StoreConfig, apply_edits};
use crate::error::Result;
use crate::storage::{JsonStorage, StorageBackend};
use crate::sync::RwLockExt;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Settings store persisted to a single file
///
/// The whole map is cached in memory. Every commit writes the complete new
/// map to disk (temp file + rename) before the cache is updated, so the call
/// returns only once the change is durable and a failed write changes nothing.
pub struct FileStore<S: StorageBackend = JsonStorage> {
    path: PathBuf,
    storage: S,
    values: RwLock<BTreeMap<String, SettingValue>>,
    listeners: ChangeListeners,
}

impl<S: StorageBackend> FileStore<S> {
    /// Open the store described by `config`
    ///
    /// A missing file is treated as an empty store; the file is created on
    /// the first commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(config: StoreConfig<S>) -> Result<Self> {
        let path = config.store_path();
        let values = load(&config.storage, &path)?;

        info!(
            "Opened {} store at {} ({} keys)",
            config.storage.extension(),
            path.display(),
            values.len()
        );

        Ok(Self {
            path,
            storage: config.storage,
            values: RwLock::new(values),
            listeners: ChangeListeners::new(),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Change listeners fired after each commit
    pub fn listeners(&self) -> &ChangeListeners {
        &self.listeners
    }

    /// Discard the cache and re-read the backing file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    /// The cache is left unchanged in that case.
    pub fn reload(&self) -> Result<()> {
        let fresh = load(&self.storage, &self.path)?;
        *self.values.write_recovered() = fresh;
        debug!("Reloaded store from {}", self.path.display());
        Ok(())
    }
}

fn load<S: StorageBackend>(storage: &S, path: &Path) -> Result<BTreeMap<String, SettingValue>> {
    if path.exists() {
        storage.read(path)
    } else {
        debug!("No store file at {}, starting empty", path.display());
        Ok(BTreeMap::new())
    }
}

impl<S: StorageBackend> SettingsStore for FileStore<S> {
    fn read(&self, key: &str) -> Result<Option<SettingValue>> {
        Ok(self.values.read_recovered().get(key).cloned())
    }

    fn commit(&self, edits: Vec<Edit>) -> Result<()> {
        let changes = {
            // Holding the write lock across the disk write keeps commits serialized
            let mut values = self.values.write_recovered();
            let mut next = values.clone();
            let changes = apply_edits(&mut next, edits)?;
            if changes.is_empty() {
                return Ok(());
            }

            self.storage.write(&self.path, &next)?;
            *values = next;
            changes
        };

        debug!(
            "Committed {} change(s) to {}",
            changes.len(),
            self.path.display()
        );
        self.listeners.notify_all(&changes);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.read_recovered().keys().cloned().collect())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> StoreConfig {
        StoreConfig::builder("test-app").config_dir(dir).build()
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(config_in(dir.path())).unwrap();

        assert!(store.keys().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_commit_is_persisted() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(config_in(dir.path())).unwrap();

        store.write("launch_count", SettingValue::Int(4)).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"launch_count\""));
        assert!(content.contains("\"int\""));

        let reopened = FileStore::open(config_in(dir.path())).unwrap();
        assert_eq!(reopened.read("launch_count").unwrap(), Some(SettingValue::Int(4)));
    }

    #[test]
    fn test_noop_commit_does_not_create_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(config_in(dir.path())).unwrap();

        store.remove("never_written").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupted_file_fails_to_open() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(config.store_path(), "{ broken").unwrap();

        let result = FileStore::open(config);
        assert!(matches!(result, Err(Error::Serialize(_))));
    }

    #[test]
    fn test_reload_picks_up_external_changes() {
        let dir = tempdir().unwrap();
        let first = FileStore::open(config_in(dir.path())).unwrap();
        let second = FileStore::open(config_in(dir.path())).unwrap();

        first.write("theme", SettingValue::from("dark")).unwrap();
        assert_eq!(second.read("theme").unwrap(), None);

        second.reload().unwrap();
        assert_eq!(second.read("theme").unwrap(), Some(SettingValue::from("dark")));
    }
}
