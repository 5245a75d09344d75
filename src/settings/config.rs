//! Configuration for file-backed settings stores

use std::path::PathBuf;

use crate::storage::{JsonStorage, StorageBackend};

/// Where and how a [`FileStore`](super::FileStore) keeps its data
#[derive(Debug, Clone)]
pub struct StoreConfig<S: StorageBackend = JsonStorage> {
    /// Directory holding the store file
    pub config_dir: PathBuf,

    /// File stem of the store (extension comes from the backend)
    pub store_name: String,

    /// Application name (used for the default directory)
    pub app_name: String,

    /// Storage backend implementation
    pub storage: S,
}

impl<S: StorageBackend> StoreConfig<S> {
    /// Get the full path to the store file
    pub fn store_path(&self) -> PathBuf {
        self.config_dir
            .join(format!("{}.{}", self.store_name, self.storage.extension()))
    }
}

impl StoreConfig<JsonStorage> {
    /// Create a new builder for StoreConfig
    ///
    /// # Example
    /// ```rust
    /// use appext::settings::StoreConfig;
    ///
    /// let config = StoreConfig::builder("my-app")
    ///     .config_dir("/tmp/my-app")
    ///     .store_name("user_prefs")
    ///     .build();
    ///
    /// assert!(config.store_path().ends_with("user_prefs.json"));
    /// ```
    pub fn builder(app_name: impl Into<String>) -> StoreConfigBuilder {
        StoreConfigBuilder::new(app_name)
    }
}

/// Builder for creating StoreConfig with a fluent API
#[derive(Debug, Clone)]
pub struct StoreConfigBuilder<S: StorageBackend = JsonStorage> {
    config_dir: Option<PathBuf>,
    store_name: String,
    app_name: String,
    storage: S,
}

impl StoreConfigBuilder<JsonStorage> {
    /// Create a new builder with the required app name
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            config_dir: None,
            store_name: "preferences".into(),
            app_name: app_name.into(),
            storage: JsonStorage::new(),
        }
    }

    /// Use compact JSON (no pretty printing)
    pub fn compact_json(mut self) -> Self {
        self.storage = JsonStorage::compact();
        self
    }
}

impl<S: StorageBackend> StoreConfigBuilder<S> {
    /// Set the configuration directory
    ///
    /// Supports `~` expansion for home directory.
    pub fn config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let expanded = if path.starts_with("~") {
            match dirs::home_dir() {
                Some(home) => home.join(path.strip_prefix("~").unwrap_or(&path)),
                None => path,
            }
        } else {
            path
        };
        self.config_dir = Some(expanded);
        self
    }

    /// Set the store file stem (default: "preferences")
    pub fn store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    /// Switch the on-disk format
    pub fn with_storage<T: StorageBackend>(self, storage: T) -> StoreConfigBuilder<T> {
        StoreConfigBuilder {
            config_dir: self.config_dir,
            store_name: self.store_name,
            app_name: self.app_name,
            storage,
        }
    }

    /// Build the StoreConfig
    ///
    /// If `config_dir` is not set, uses the system config directory for the app.
    pub fn build(self) -> StoreConfig<S> {
        let config_dir = self.config_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|d| d.join(&self.app_name))
                .unwrap_or_else(|| PathBuf::from("."))
        });

        StoreConfig {
            config_dir,
            store_name: self.store_name,
            app_name: self.app_name,
            storage: self.storage,
        }
    }
}
