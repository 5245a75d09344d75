//! # appext - App Extension Helpers
//!
//! Small, independent helpers for application code: typed preference
//! storage, date formatting, rupee amount formatting and form validation.
//!
//! ## Features
//!
//! - **Typed Preferences**: Read and write text, `i32`, `i64`, `f32` and `bool`
//!   values by key, with per-kind fallbacks and no silent coercion
//! - **Stores**: In-memory store for tests, file store with atomic commits
//!   (JSON by default, TOML/YAML behind features), change listeners
//! - **Dates**: `dd MMM yyyy` display dates with an explicit locale, and
//!   best-effort reformatting of ISO timestamps
//! - **Currency**: `Rs. 1,234,567` style thousands grouping
//! - **Validation**: Ordered password rule chain and e-mail address check
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use appext::settings::{FileStore, Preferences, StoreConfig};
//!
//! # fn example() -> appext::Result<()> {
//! let config = StoreConfig::builder("my-app")
//!     .config_dir("~/.config/my-app")
//!     .build();
//! let prefs = Preferences::new(FileStore::open(config)?);
//!
//! prefs.put("user_name", "ada".to_string())?;
//! let launches: i32 = prefs.get("launch_count", Some(0))?;
//! prefs.put("launch_count", launches + 1)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Formatting and Validation
//!
//! ```rust
//! use appext::currency::{CurrencyStyle, format_currency};
//! use appext::datetime::parse_iso_to_display;
//! use appext::validation::validate_password;
//!
//! assert_eq!(format_currency(1234567, CurrencyStyle::Prefixed), "Rs. 1,234,567");
//! assert_eq!(
//!     parse_iso_to_display("2023-05-04T13:26:08.000Z").as_deref(),
//!     Some("04/05/2023 13:26:08")
//! );
//! assert_eq!(validate_password("abcdefgh"), "Password must contain 1 capital letter");
//! ```

// Core modules
mod error;
pub mod storage;
mod sync;

// Grouped modules
pub mod currency;
pub mod datetime;
pub mod settings;
pub mod validation;

// Re-exports from core
pub use error::{Error, Result};
pub use storage::{JsonStorage, StorageBackend};

#[cfg(feature = "toml")]
pub use storage::TomlStorage;
#[cfg(feature = "yaml")]
pub use storage::YamlStorage;

// Re-exports of the most used entry points
pub use currency::{CurrencyStyle, ThousandsExt, format_currency};
pub use datetime::{
    Locale, current_date_time, format_display_date, parse_iso, parse_iso_to_display,
};
pub use settings::{
    FileStore, MemoryStore, Preference, Preferences, SettingKind, SettingValue, SettingsStore,
    StoreConfig,
};
pub use validation::{check_password, is_valid_email, validate_password};

/// In-memory typed preferences
///
/// # Example
/// ```rust
/// use appext::{MemoryPreferences, MemoryStore, Preferences};
///
/// let prefs: MemoryPreferences = Preferences::new(MemoryStore::new());
/// prefs.put("dark_mode", true)?;
/// assert!(prefs.get::<bool>("dark_mode", None)?);
/// # Ok::<(), appext::Error>(())
/// ```
pub type MemoryPreferences = Preferences<MemoryStore>;

/// Typed preferences persisted to a JSON file
pub type FilePreferences = Preferences<FileStore<JsonStorage>>;
