//! CLI configuration
//!
//! Loaded from `--config`, else `roster.toml` in the working directory if
//! present, else defaults. The API key is never read from the file; the
//! file only names the environment variable that holds it.

use roster_report::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use roster_report::{GeminiConfig, ReportMetadata};
use roster_store::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Environment variable consulted when the configured one is unset
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Source error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Source error
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Where the roster is persisted
    pub storage: StorageConfig,
    /// Text-generation service settings
    pub report: ReportConfig,
    /// Report header details
    pub metadata: ReportMetadata,
}

/// Storage slot location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the slot file
    pub data_dir: PathBuf,
    /// Slot key (file stem)
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".roster"),
            key: DEFAULT_SLOT_KEY.to_string(),
        }
    }
}

/// Report service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// API base URL
    pub endpoint: String,
    /// Model name
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RosterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from an explicit file, `roster.toml` if present, or defaults
    ///
    /// # Errors
    /// `ConfigError` if an explicit file is missing or any file is invalid
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a TOML config file
    ///
    /// # Errors
    /// `ConfigError::Read` or `ConfigError::Parse`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// With data directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = data_dir.into();
        self
    }

    /// API key from the configured variable, then `API_KEY`
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// API key lookup with an injectable environment
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        [self.report.api_key_env.as_str(), FALLBACK_API_KEY_ENV]
            .into_iter()
            .filter_map(lookup)
            .find(|v| !v.trim().is_empty())
    }

    /// Client configuration for the report service
    #[must_use]
    pub fn gemini_config(&self, api_key: Option<String>) -> GeminiConfig {
        GeminiConfig {
            endpoint: self.report.endpoint.clone(),
            model: self.report.model.clone(),
            api_key,
            timeout_secs: self.report.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let config = RosterConfig::new();
        assert_eq!(config.storage.key, "hospital_workforce_data");
        assert_eq!(config.report.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.report.timeout_secs, 60);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: RosterConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/var/lib/roster"

            [metadata]
            hospital = "General Hospital"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/roster"));
        assert_eq!(config.storage.key, DEFAULT_SLOT_KEY);
        assert_eq!(config.metadata.hospital, "General Hospital");
        assert_eq!(config.metadata.role, ReportMetadata::default().role);
        assert_eq!(config.report.model, DEFAULT_MODEL);
    }

    #[test]
    fn load_explicit_missing_file_fails() {
        let err = RosterConfig::load(Some(Path::new("/nonexistent/roster.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_invalid_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(&path, "[report]\ntimeout_secs = \"soon\"").unwrap();
        assert!(matches!(
            RosterConfig::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn api_key_prefers_configured_variable() {
        let env: HashMap<&str, &str> = [("GEMINI_API_KEY", "primary"), ("API_KEY", "fallback")].into();
        let config = RosterConfig::new();
        let key = config.resolve_api_key_with(|n| env.get(n).map(ToString::to_string));
        assert_eq!(key.as_deref(), Some("primary"));
    }

    #[test]
    fn api_key_falls_back_and_skips_blank() {
        let env: HashMap<&str, &str> = [("GEMINI_API_KEY", " "), ("API_KEY", "fallback")].into();
        let config = RosterConfig::new();
        let key = config.resolve_api_key_with(|n| env.get(n).map(ToString::to_string));
        assert_eq!(key.as_deref(), Some("fallback"));
    }

    #[test]
    fn gemini_config_from_report_section() {
        let mut config = RosterConfig::new();
        config.report.model = "other-model".into();
        let gemini = config.gemini_config(Some("k".into()));
        assert_eq!(gemini.model, "other-model");
        assert_eq!(gemini.api_key.as_deref(), Some("k"));
    }
}
