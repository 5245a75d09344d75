//! In-memory settings store (not persisted)

use super::{ChangeListeners, Edit, SettingValue, SettingsStore, apply_edits};
use crate::error::Result;
use crate::sync::RwLockExt;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Session-only settings store, useful for tests
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, SettingValue>>,
    listeners: ChangeListeners,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Change listeners fired after each commit
    pub fn listeners(&self) -> &ChangeListeners {
        &self.listeners
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<SettingValue>> {
        Ok(self.values.read_recovered().get(key).cloned())
    }

    fn commit(&self, edits: Vec<Edit>) -> Result<()> {
        let changes = {
            let mut values = self.values.write_recovered();
            apply_edits(&mut values, edits)?
        };
        self.listeners.notify_all(&changes);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.values.read_recovered().keys().cloned().collect())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// =============================================================================
// Tests
// =============================================================================
