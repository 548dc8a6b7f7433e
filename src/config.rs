//! Application configuration.
//!
//! Every section has a [`Default`] matching the behaviour users expect from
//! the board, so an empty configuration is valid. [`AppConfig::load`] layers
//! an optional file and `TASKBOARD_*` environment variables over the
//! defaults; nested keys use a double underscore, for example
//! `TASKBOARD_TASKS__MAX_NAME_CHARS=80`.
//!
//! # Examples
//!
//! ```
//! use taskboard::config::{AuthConfig, TaskRules};
//!
//! let rules = TaskRules::default();
//! assert_eq!(rules.min_name_chars, 3);
//! assert_eq!(rules.max_name_chars, 100);
//!
//! let fast = AuthConfig::for_tests();
//! assert!(fast.bcrypt_cost < AuthConfig::default().bcrypt_cost);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Lowest work factor bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Field rules applied when tasks are created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskRules {
    /// Minimum task name length in characters.
    pub min_name_chars: usize,
    /// Maximum task name length in characters.
    pub max_name_chars: usize,
}

impl Default for TaskRules {
    fn default() -> Self {
        Self {
            min_name_chars: 3,
            max_name_chars: 100,
        }
    }
}

/// Credential handling settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// bcrypt work factor used when hashing passwords.
    pub bcrypt_cost: u32,
    /// Minimum password length in characters.
    pub min_password_len: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            min_password_len: 8,
        }
    }
}

impl AuthConfig {
    /// Creates a configuration using the cheapest bcrypt cost.
    ///
    /// Useful for tests, where hashing time dominates otherwise.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            bcrypt_cost: MIN_BCRYPT_COST,
            ..Self::default()
        }
    }
}

/// Location of the directory blob store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key.
    pub directory: Utf8PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: Utf8PathBuf::from("taskboard-data"),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Task field rules.
    pub tasks: TaskRules,
    /// Credential handling.
    pub auth: AuthConfig,
    /// Blob storage location.
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, an optional file, and the
    /// environment, in increasing order of precedence.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`config::ConfigError`] when the file cannot be parsed or a
    /// value has the wrong type.
    pub fn load(file: Option<&Utf8Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path.as_std_path()).required(false));
        }
        let loaded: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        tracing::debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }
}
