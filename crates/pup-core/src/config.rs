//! Application configuration types.
//!
//! The top-level [`Config`] struct is deserialized from JSON. Every section
//! defaults sensibly so a completely empty `{}` file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::Error;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub flickr: FlickrConfig,
}

impl Config {
    /// Deserialize a `Config` from a JSON string.
    ///
    /// This is intentionally string-based so the caller can read the file
    /// however it sees fit (async, embedded, etc.).
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| Error::Validation(format!("config parse error: {e}")))
    }

    /// Load configuration from a file path, falling back to defaults if the
    /// path is `None` or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file {}: {e}", path.display());
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Return a list of validation warnings (non-fatal issues).
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.storage.db_path.as_os_str().is_empty() {
            warnings.push("storage.db_path is empty".into());
        }

        if self.flickr.api_key.is_none() {
            warnings.push("flickr.api_key is not set; search requests will fail".into());
        }

        if self.flickr.per_page == 0 {
            warnings.push("flickr.per_page is 0; searches will return no photos".into());
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Backing-store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// Delete any existing database file on startup (cold start).
    pub reset_on_start: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./puppies.sqlite"),
            reset_on_start: false,
        }
    }
}

/// Settings echoed to the Flickr search collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlickrConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_per_page() -> u32 {
    20
}

impl Default for FlickrConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            per_page: default_per_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = Config::default();
        assert_eq!(cfg.storage.db_path, PathBuf::from("./puppies.sqlite"));
        assert!(!cfg.storage.reset_on_start);
        assert_eq!(cfg.flickr.per_page, 20);
        assert!(cfg.flickr.api_key.is_none());
    }

    #[test]
    fn missing_api_key_warns() {
        let cfg = Config::default();
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("api_key")));
    }

    #[test]
    fn parse_json_config() {
        let json = r#"{"storage": {"db_path": "/tmp/pups.db", "reset_on_start": true}}"#;
        let cfg = Config::from_json(json).unwrap();
        assert_eq!(cfg.storage.db_path, PathBuf::from("/tmp/pups.db"));
        assert!(cfg.storage.reset_on_start);
        // Untouched section keeps its defaults.
        assert_eq!(cfg.flickr.per_page, 20);
    }

    #[test]
    fn parse_empty_json_uses_defaults() {
        let cfg = Config::from_json("{}").unwrap();
        assert_eq!(cfg.storage.db_path, PathBuf::from("./puppies.sqlite"));
    }

    #[test]
    fn invalid_json_is_a_validation_error() {
        let err = Config::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn load_or_default_with_none() {
        let cfg = Config::load_or_default(None);
        assert_eq!(cfg.flickr.per_page, 20);
    }

    #[test]
    fn load_or_default_with_missing_file() {
        let cfg = Config::load_or_default(Some(Path::new("/nonexistent/config.json")));
        assert_eq!(cfg.flickr.per_page, 20);
    }

    #[test]
    fn zero_per_page_warns() {
        let cfg = Config::from_json(r#"{"flickr": {"per_page": 0}}"#).unwrap();
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("per_page")));
    }
}
