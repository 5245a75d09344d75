//! Typed key-value settings
//!
//! A [`SettingsStore`] maps string keys to one of five scalar kinds
//! (see [`SettingKind`]). The free functions [`get`] and [`put`] select the
//! kind explicitly; [`Preferences`] selects it from a Rust type parameter.
//!
//! Kinds are never coerced: reading an `Int` key as a `Long`, or passing a
//! default of the wrong kind, fails with [`Error::TypeMismatch`]. Asking for a
//! kind that does not exist fails with [`Error::UnsupportedType`]. Both are
//! programming errors rather than runtime conditions.
//!
//! ```rust
//! use appext::settings::{MemoryStore, Preferences};
//!
//! let prefs = Preferences::new(MemoryStore::new());
//! prefs.put("launch_count", 3i32)?;
//!
//! assert_eq!(prefs.get::<i32>("launch_count", None)?, 3);
//! assert_eq!(prefs.get::<bool>("onboarded", None)?, false);
//! assert_eq!(prefs.get("user_name", Some("guest".to_string()))?, "guest");
//! # Ok::<(), appext::Error>(())
//! ```

mod accessor;
mod config;
mod events;
mod file;
mod memory;
mod types;

pub use accessor::Preferences;
pub use config::{StoreConfig, StoreConfigBuilder};
pub use events::{Change, ChangeCallback, ChangeListeners};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use types::{Preference, SettingKind, SettingValue};

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

// =============================================================================
// Store Contract
// =============================================================================

/// A single mutation inside a commit
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Put(String, SettingValue),
    Remove(String),
    /// Remove every key; applied before the other edits of the same commit
    Clear,
}

/// Trait for key-value settings stores
///
/// Implementations apply a commit atomically: either every edit becomes
/// visible (and durable, for persistent stores) or none does.
pub trait SettingsStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read.
    fn read(&self, key: &str) -> Result<Option<SettingValue>>;

    /// Apply a batch of edits atomically
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteFloat`] if the batch puts a NaN or
    /// infinite float, or an error if the batch could not be persisted.
    /// Nothing is applied in either case.
    fn commit(&self, edits: Vec<Edit>) -> Result<()>;

    /// List all stored keys
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to list keys.
    fn keys(&self) -> Result<Vec<String>>;

    /// Backend name for logging/debugging
    fn backend_name(&self) -> &'static str;

    /// Store a single value
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::commit`].
    fn write(&self, key: &str, value: SettingValue) -> Result<()> {
        self.commit(vec![Edit::Put(key.to_string(), value)])
    }

    /// Remove a single key
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::commit`].
    fn remove(&self, key: &str) -> Result<()> {
        self.commit(vec![Edit::Remove(key.to_string())])
    }

    /// Check if a key is present
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.read(key)?.is_some())
    }

    /// Start a batch of edits
    fn edit(&self) -> Editor<'_, Self>
    where
        Self: Sized,
    {
        Editor::new(self)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn read(&self, key: &str) -> Result<Option<SettingValue>> {
        (**self).read(key)
    }

    fn commit(&self, edits: Vec<Edit>) -> Result<()> {
        (**self).commit(edits)
    }

    fn keys(&self) -> Result<Vec<String>> {
        (**self).keys()
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}

/// Collects edits and commits them as one batch
///
/// ```rust
/// use appext::settings::{MemoryStore, SettingsStore, SettingValue};
///
/// let store = MemoryStore::new();
/// store
///     .edit()
///     .put("user_name", "ada")
///     .put("launch_count", 1i32)
///     .remove("legacy_flag")
///     .commit()?;
///
/// assert_eq!(store.read("launch_count")?, Some(SettingValue::Int(1)));
/// # Ok::<(), appext::Error>(())
/// ```
#[must_use = "edits are only applied by commit()"]
pub struct Editor<'a, S: SettingsStore + ?Sized> {
    store: &'a S,
    edits: Vec<Edit>,
}

impl<'a, S: SettingsStore + ?Sized> Editor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            edits: Vec::new(),
        }
    }

    pub fn put(mut self, key: &str, value: impl Into<SettingValue>) -> Self {
        self.edits.push(Edit::Put(key.to_string(), value.into()));
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.edits.push(Edit::Remove(key.to_string()));
        self
    }

    pub fn clear(mut self) -> Self {
        self.edits.push(Edit::Clear);
        self
    }

    /// Apply all collected edits atomically
    ///
    /// # Errors
    ///
    /// See [`SettingsStore::commit`].
    pub fn commit(self) -> Result<()> {
        if self.edits.is_empty() {
            return Ok(());
        }
        self.store.commit(self.edits)
    }
}

/// Reject values no store can hold before any edit is applied
fn check_storable(edits: &[Edit]) -> Result<()> {
    for edit in edits {
        match edit {
            Edit::Put(key, SettingValue::Float(value)) if !value.is_finite() => {
                return Err(Error::NonFiniteFloat {
                    key: key.clone(),
                    value: *value,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Apply edits to an in-memory map and report the keys whose value changed
///
/// The map is left untouched when any edit is rejected.
pub(crate) fn apply_edits(
    values: &mut BTreeMap<String, SettingValue>,
    edits: Vec<Edit>,
) -> Result<Vec<Change>> {
    check_storable(&edits)?;
    let before = values.clone();

    if edits.iter().any(|edit| matches!(edit, Edit::Clear)) {
        values.clear();
    }
    for edit in edits {
        match edit {
            Edit::Put(key, value) => {
                values.insert(key, value);
            }
            Edit::Remove(key) => {
                values.remove(&key);
            }
            Edit::Clear => {}
        }
    }

    let mut changes = Vec::new();
    for (key, old) in &before {
        let new = values.get(key);
        if new != Some(old) {
            changes.push(Change {
                key: key.clone(),
                old: Some(old.clone()),
                new: new.cloned(),
            });
        }
    }
    for (key, new) in values.iter() {
        if !before.contains_key(key) {
            changes.push(Change {
                key: key.clone(),
                old: None,
                new: Some(new.clone()),
            });
        }
    }
    Ok(changes)
}

// =============================================================================
// Kind-selected Accessors
// =============================================================================

fn ensure_kind(key: &str, expected: SettingKind, value: &SettingValue) -> Result<()> {
    if value.kind() == expected {
        Ok(())
    } else {
        Err(Error::TypeMismatch {
            key: key.to_string(),
            expected: expected.to_string(),
            actual: value.kind().to_string(),
        })
    }
}

/// Read `key` as `kind`
///
/// Returns the stored value when present, otherwise `default`, otherwise
/// the kind's fallback (`""`, `-1`, `-1`, `-1.0`, `false`).
///
/// # Errors
///
/// - [`Error::TypeMismatch`] if `default` or the stored value is of another kind
/// - any error from [`SettingsStore::read`]
pub fn get<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
    kind: SettingKind,
    default: Option<SettingValue>,
) -> Result<SettingValue> {
    if let Some(default) = &default {
        ensure_kind(key, kind, default)?;
    }

    match store.read(key)? {
        Some(value) => {
            ensure_kind(key, kind, &value)?;
            Ok(value)
        }
        None => Ok(default.unwrap_or_else(|| kind.fallback())),
    }
}

/// Write `value` under `key` as `kind`
///
/// A `None` value removes a `Text` key and stores the fallback for every
/// other kind.
///
/// # Errors
///
/// - [`Error::TypeMismatch`] if `value` is of another kind
/// - [`Error::NonFiniteFloat`] for a NaN or infinite `Float`
/// - any error from [`SettingsStore::commit`]
pub fn put<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
    kind: SettingKind,
    value: Option<SettingValue>,
) -> Result<()> {
    match value {
        Some(value) => {
            ensure_kind(key, kind, &value)?;
            store.write(key, value)
        }
        None if kind == SettingKind::Text => store.remove(key),
        None => store.write(key, kind.fallback()),
    }
}

/// [`get`] with the kind given by name (e.g. `"int"`, `"Boolean"`)
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for an unknown kind name, otherwise as [`get`].
pub fn get_by_name<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
    type_name: &str,
    default: Option<SettingValue>,
) -> Result<SettingValue> {
    get(store, key, type_name.parse()?, default)
}

/// [`put`] with the kind given by name
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for an unknown kind name, otherwise as [`put`].
pub fn put_by_name<S: SettingsStore + ?Sized>(
    store: &S,
    key: &str,
    type_name: &str,
    value: Option<SettingValue>,
) -> Result<()> {
    put(store, key, type_name.parse()?, value)
}
