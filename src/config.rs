//! Application configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```
//! use portico::config::AppConfig;
//! use app_ui::ThemeName;
//!
//! let config = AppConfig::from_json(r#"{ "theme": "dark", "session_delay_ms": 250 }"#).unwrap();
//! assert_eq!(config.theme, ThemeName::Dark);
//! assert_eq!(config.session_delay_ms, 250);
//! assert_eq!(config.notice_delay_ms, 2000);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use app_state::FormPolicy;
use app_ui::ThemeName;
use serde::{Deserialize, Serialize};
use storage::KvConfig;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Where the session store lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database path
    pub path: String,
    /// Keep items in memory only
    pub in_memory: bool,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let kv = KvConfig::default();
        Self {
            path: kv.path,
            in_memory: false,
            cache_capacity: kv.cache_capacity,
        }
    }
}

impl StorageConfig {
    /// sled settings for this store
    pub fn kv_config(&self) -> KvConfig {
        KvConfig::new(self.path.clone()).cache_capacity(self.cache_capacity)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Session store
    pub storage: StorageConfig,
    /// Initial theme
    pub theme: ThemeName,
    /// Simulated round trip before session screens navigate
    pub session_delay_ms: u64,
    /// Simulated round trip before inert screens show their notice
    pub notice_delay_ms: u64,
    /// Loading time before a stored session enters the main section
    pub entry_delay_ms: u64,
    /// Replaces every screen's default error-clearing policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_policy: Option<FormPolicy>,
    /// Tracing filter directive; `RUST_LOG` is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            theme: ThemeName::default(),
            session_delay_ms: 1500,
            notice_delay_ms: 2000,
            entry_delay_ms: 3000,
            form_policy: None,
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Default configuration with a volatile store
    pub fn in_memory() -> Self {
        Self {
            storage: StorageConfig {
                in_memory: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Store sessions in a sled database at `path`
    pub fn with_storage_path(mut self, path: impl Into<String>) -> Self {
        self.storage.path = path.into();
        self.storage.in_memory = false;
        self
    }

    /// Set the initial theme
    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }

    /// Set both simulated delays in milliseconds
    pub fn with_delays(mut self, session_ms: u64, notice_ms: u64) -> Self {
        self.session_delay_ms = session_ms;
        self.notice_delay_ms = notice_ms;
        self
    }

    /// Set the startup loading time in milliseconds
    pub fn with_entry_delay(mut self, entry_ms: u64) -> Self {
        self.entry_delay_ms = entry_ms;
        self
    }

    /// Apply one error-clearing policy to every form
    pub fn with_form_policy(mut self, policy: FormPolicy) -> Self {
        self.form_policy = Some(policy);
        self
    }

    /// Set the tracing filter directive
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Session delay as a duration
    pub fn session_delay(&self) -> Duration {
        Duration::from_millis(self.session_delay_ms)
    }

    /// Notice delay as a duration
    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_delay_ms)
    }

    /// Entry delay as a duration
    pub fn entry_delay(&self) -> Duration {
        Duration::from_millis(self.entry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session_delay(), Duration::from_millis(1500));
        assert_eq!(config.notice_delay(), Duration::from_millis(2000));
        assert_eq!(config.entry_delay(), Duration::from_millis(3000));
        assert_eq!(config.theme, ThemeName::Light);
        assert!(!config.storage.in_memory);
        assert!(config.form_policy.is_none());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_form_policy() {
        let config =
            AppConfig::from_json(r#"{ "form_policy": { "clear_error_on_focus": false } }"#).unwrap();
        let policy = config.form_policy.unwrap();
        assert!(!policy.clear_error_on_focus);
        assert!(policy.clear_error_on_empty);
    }

    #[test]
    fn test_storage_section() {
        let config =
            AppConfig::from_json(r#"{ "storage": { "path": "/tmp/p.db", "in_memory": true } }"#)
                .unwrap();
        assert_eq!(config.storage.path, "/tmp/p.db");
        assert!(config.storage.in_memory);
        assert_eq!(config.storage.kv_config().path, "/tmp/p.db");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let result = AppConfig::from_json(r#"{ "theme": "dim" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "notice_delay_ms": 10, "log_filter": "portico=debug" }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.notice_delay_ms, 10);
        assert_eq!(config.log_filter.as_deref(), Some("portico=debug"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load("/nonexistent/portico.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::in_memory()
            .with_storage_path("sessions.db")
            .with_theme(ThemeName::Dark)
            .with_delays(5, 6)
            .with_entry_delay(7)
            .with_form_policy(FormPolicy::sticky());

        assert!(!config.storage.in_memory);
        assert_eq!(config.storage.path, "sessions.db");
        assert_eq!(config.session_delay_ms, 5);
        assert_eq!(config.entry_delay_ms, 7);
        assert_eq!(config.form_policy, Some(FormPolicy::sticky()));
    }
}
