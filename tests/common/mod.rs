//! Common test utilities for appext integration tests
//!
//! Provides a file-backed store fixture and helpers for inspecting the
//! store file on disk.

#![allow(dead_code)]

use appext::settings::{FileStore, Preferences, StoreConfig};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Fixture
// =============================================================================

/// A file-backed preference store living in a temporary directory
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub prefs: Preferences<FileStore>,
}

impl TestFixture {
    /// Create a new test fixture with default configuration
    pub fn new() -> Self {
        init_logging();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let prefs = open_prefs(&temp_dir);
        Self { temp_dir, prefs }
    }

    /// Open a second, independent store over the same directory
    pub fn reopen(&self) -> Preferences<FileStore> {
        open_prefs(&self.temp_dir)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Get the store file path
    pub fn store_path(&self) -> PathBuf {
        self.temp_dir.path().join("preferences.json")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn open_prefs(temp_dir: &TempDir) -> Preferences<FileStore> {
    let config = StoreConfig::builder("test-app")
        .config_dir(temp_dir.path())
        .build();
    Preferences::new(FileStore::open(config).expect("Failed to open store"))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Route `log` output through the test harness (RUST_LOG=debug to see it)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Read the raw store JSON file content
pub fn read_store_file(fixture: &TestFixture) -> Option<serde_json::Value> {
    let path = fixture.store_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

/// Check if a key exists in the store JSON file
pub fn key_exists_in_file(fixture: &TestFixture, key: &str) -> bool {
    read_store_file(fixture)
        .map(|json| json.get(key).is_some())
        .unwrap_or(false)
}
