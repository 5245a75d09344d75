//! Change listeners for settings stores
//!
//! Listeners run after a commit has been applied, outside the store lock,
//! so a callback may read the store it is watching.

use super::SettingValue;
use crate::sync::RwLockExt;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Callback receiving (`key`, `old_value`, `new_value`); `None` means absent
pub type ChangeCallback =
    Arc<dyn Fn(&str, Option<&SettingValue>, Option<&SettingValue>) + Send + Sync>;

/// One key whose stored value changed during a commit
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub key: String,
    pub old: Option<SettingValue>,
    pub new: Option<SettingValue>,
}

/// Registry of change listeners owned by a store
#[derive(Default)]
pub struct ChangeListeners {
    /// Called for every change
    global: RwLock<Vec<ChangeCallback>>,

    /// Called only for changes to a specific key
    by_key: RwLock<HashMap<String, Vec<ChangeCallback>>>,
}

impl ChangeListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener called for every changed key
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&str, Option<&SettingValue>, Option<&SettingValue>) + Send + Sync + 'static,
    {
        self.global.write_recovered().push(Arc::new(callback));
    }

    /// Register a listener for a single key
    pub fn watch<F>(&self, key: &str, callback: F)
    where
        F: Fn(&str, Option<&SettingValue>, Option<&SettingValue>) + Send + Sync + 'static,
    {
        self.by_key
            .write_recovered()
            .entry(key.to_string())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Remove all listeners for a specific key
    pub fn unwatch(&self, key: &str) {
        self.by_key.write_recovered().remove(key);
    }

    /// Clear all listeners
    pub fn clear(&self) {
        self.global.write_recovered().clear();
        self.by_key.write_recovered().clear();
    }

    /// Notify listeners about a single change
    pub fn notify(&self, key: &str, old: Option<&SettingValue>, new: Option<&SettingValue>) {
        // Snapshot so callbacks can register listeners without deadlocking
        let mut callbacks: Vec<ChangeCallback> = self.global.read_recovered().clone();
        if let Some(listeners) = self.by_key.read_recovered().get(key) {
            callbacks.extend(listeners.iter().cloned());
        }

        for callback in callbacks {
            callback(key, old, new);
        }
    }

    pub(crate) fn notify_all(&self, changes: &[Change]) {
        for change in changes {
            self.notify(&change.key, change.old.as_ref(), change.new.as_ref());
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_global_listener() {
        let listeners = ChangeListeners::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        listeners.on_change(move |_key, _old, _new| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        listeners.notify("user.name", None, Some(&SettingValue::from("ada")));
        listeners.notify("launch_count", None, Some(&SettingValue::Int(1)));

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_key_specific_listener() {
        let listeners = ChangeListeners::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        listeners.watch("dark_mode", move |key, old, new| {
            assert_eq!(key, "dark_mode");
            assert_eq!(old, Some(&SettingValue::Bool(false)));
            assert_eq!(new, Some(&SettingValue::Bool(true)));
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        listeners.notify(
            "dark_mode",
            Some(&SettingValue::Bool(false)),
            Some(&SettingValue::Bool(true)),
        );
        listeners.notify("language", None, Some(&SettingValue::from("en")));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unwatch_and_clear() {
        let listeners = ChangeListeners::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        listeners.watch("k", move |_, _, _| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        listeners.unwatch("k");
        listeners.notify("k", None, None);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        let c = counter.clone();
        listeners.on_change(move |_, _, _| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        listeners.clear();
        listeners.notify("k", None, None);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
