//! Type-directed access to a settings store

use super::{Preference, SettingKind, SettingValue, SettingsStore, get, put};
use crate::error::{Error, Result};
use std::any::Any;

/// Wraps a store so the value kind is chosen by a Rust type parameter
pub struct Preferences<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read `key` as `T`, falling back to `default` and then to the kind's fallback
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the key holds another kind.
    pub fn get<T: Preference>(&self, key: &str, default: Option<T>) -> Result<T> {
        let value = get(&self.store, key, T::KIND, default.map(Preference::into_value))?;
        unwrap_kind(key, T::KIND, value)
    }

    /// Store `value` under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to commit.
    pub fn put<T: Preference>(&self, key: &str, value: T) -> Result<()> {
        put(&self.store, key, T::KIND, Some(value.into_value()))
    }

    /// Store an optional value; `None` removes text and writes the fallback otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to commit.
    pub fn put_optional<T: Preference>(&self, key: &str, value: Option<T>) -> Result<()> {
        put(&self.store, key, T::KIND, value.map(Preference::into_value))
    }

    /// Like [`Preferences::get`], but the kind is resolved at runtime
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] naming `T` when it is not a
    /// supported scalar type, otherwise as [`Preferences::get`].
    pub fn get_any<T: Any>(&self, key: &str, default: Option<T>) -> Result<T> {
        let kind = SettingKind::of::<T>()?;
        let default = default.map(SettingValue::from_any).transpose()?;
        let value = get(&self.store, key, kind, default)?;
        value
            .into_any()
            .downcast::<T>()
            .map(|v| *v)
            .map_err(|_| Error::UnsupportedType(std::any::type_name::<T>().to_string()))
    }

    /// Like [`Preferences::put`], but the kind is resolved at runtime
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] naming `T` when it is not a
    /// supported scalar type. Nothing is written in that case.
    pub fn put_any<T: Any>(&self, key: &str, value: T) -> Result<()> {
        let value = SettingValue::from_any(value)?;
        put(&self.store, key, value.kind(), Some(value))
    }
}

fn unwrap_kind<T: Preference>(key: &str, kind: SettingKind, value: SettingValue) -> Result<T> {
    let actual = value.kind();
    T::from_value(value).ok_or_else(|| Error::TypeMismatch {
        key: key.to_string(),
        expected: kind.to_string(),
        actual: actual.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn test_typed_round_trip() {
        let prefs = Preferences::new(MemoryStore::new());

        prefs.put("name", "ada".to_string()).unwrap();
        prefs.put("count", 7i32).unwrap();
        prefs.put("installed_at", 1_683_206_768_000i64).unwrap();
        prefs.put("volume", 0.75f32).unwrap();
        prefs.put("onboarded", true).unwrap();

        assert_eq!(prefs.get::<String>("name", None).unwrap(), "ada");
        assert_eq!(prefs.get::<i32>("count", None).unwrap(), 7);
        assert_eq!(prefs.get::<i64>("installed_at", None).unwrap(), 1_683_206_768_000);
        assert_eq!(prefs.get::<f32>("volume", None).unwrap(), 0.75);
        assert!(prefs.get::<bool>("onboarded", None).unwrap());
    }

    #[test]
    fn test_typed_fallbacks() {
        let prefs = Preferences::new(MemoryStore::new());

        assert_eq!(prefs.get::<String>("missing", None).unwrap(), "");
        assert_eq!(prefs.get::<i32>("missing", None).unwrap(), -1);
        assert_eq!(prefs.get::<i64>("missing", None).unwrap(), -1);
        assert_eq!(prefs.get::<f32>("missing", None).unwrap(), -1.0);
        assert!(!prefs.get::<bool>("missing", None).unwrap());
        assert_eq!(prefs.get("missing", Some(10i32)).unwrap(), 10);
    }

    #[test]
    fn test_typed_get_of_other_kind_fails() {
        let prefs = Preferences::new(MemoryStore::new());
        prefs.put("count", 7i32).unwrap();

        let err = prefs.get::<i64>("count", None).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_put_optional() {
        let prefs = Preferences::new(MemoryStore::new());

        prefs.put("token", "abc".to_string()).unwrap();
        prefs.put_optional::<String>("token", None).unwrap();
        assert!(!prefs.store().contains("token").unwrap());

        prefs.put_optional::<bool>("flag", None).unwrap();
        assert_eq!(prefs.store().read("flag").unwrap(), Some(SettingValue::Bool(false)));
    }

    #[test]
    fn test_any_supported() {
        let prefs = Preferences::new(MemoryStore::new());

        prefs.put_any("count", 3i32).unwrap();
        assert_eq!(prefs.get_any::<i32>("count", None).unwrap(), 3);
        assert_eq!(prefs.get_any::<bool>("missing", None).unwrap(), false);
    }

    #[test]
    fn test_any_unsupported_fails_fast() {
        let prefs = Preferences::new(MemoryStore::new());

        let err = prefs.put_any("ratio", 0.5f64).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type: f64");
        assert!(prefs.store().keys().unwrap().is_empty());

        let err = prefs.get_any::<u64>("ratio", None).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(ref name) if name == "u64"));
    }
}
