//! Configuration for the letsbus workspace
//!
//! Loaded from `~/.letsbus/config.toml`. Every field has a default, so a
//! missing file is fine; a file that exists but doesn't parse is an error.
//!
//! ```toml
//! [directory]
//! endpoint = "http://localhost:5000/users"
//!
//! [server]
//! bind = "127.0.0.1:5000"
//! database_url = "sqlite://letsbus.db?mode=rwc"
//!
//! [reports]
//! endpoint = "http://localhost:5000/reports"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LetsbusError, Result};

/// Where the users page fetches from when nothing overrides it
pub const DEFAULT_DIRECTORY_URL: &str = "http://localhost:5000/users";

/// Where finished bus reports are posted
pub const DEFAULT_REPORTS_URL: &str = "http://localhost:5000/reports";

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://letsbus.db?mode=rwc";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LetsbusConfig {
    pub directory: DirectoryConfig,
    pub server: ServerSection,
    pub reports: ReportsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub endpoint: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DIRECTORY_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: String,
    pub database_url: String,
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    pub endpoint: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REPORTS_URL.to_string(),
        }
    }
}

impl LetsbusConfig {
    /// Load from the default location, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_env();
        Ok(config)
    }

    /// Load from a specific file. Missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| LetsbusError::config(path, e.to_string()))
    }

    /// Config file path: ~/.letsbus/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".letsbus/config.toml")
    }

    /// `LETSBUS_DIRECTORY_URL`, `LETSBUS_REPORTS_URL` and `DATABASE_URL` win over the file.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            env::var("LETSBUS_DIRECTORY_URL").ok(),
            env::var("LETSBUS_REPORTS_URL").ok(),
            env::var("DATABASE_URL").ok(),
        );
    }

    fn apply_overrides(
        &mut self,
        directory: Option<String>,
        reports: Option<String>,
        database_url: Option<String>,
    ) {
        if let Some(url) = directory.filter(|s| !s.is_empty()) {
            self.directory.endpoint = url;
        }
        if let Some(url) = reports.filter(|s| !s.is_empty()) {
            self.reports.endpoint = url;
        }
        if let Some(url) = database_url.filter(|s| !s.is_empty()) {
            self.server.database_url = url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LetsbusConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.directory.endpoint, DEFAULT_DIRECTORY_URL);
        assert_eq!(config.server.bind, DEFAULT_BIND);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[directory]\nendpoint = \"http://dir.local/users\"").unwrap();

        let config = LetsbusConfig::load_from(file.path()).unwrap();
        assert_eq!(config.directory.endpoint, "http://dir.local/users");
        assert_eq!(config.reports.endpoint, DEFAULT_REPORTS_URL);
        assert!(!config.server.cors_permissive);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[directory\nendpoint =").unwrap();

        let err = LetsbusConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, LetsbusError::Config { .. }));
    }

    #[test]
    fn overrides_skip_empty_values() {
        let mut config = LetsbusConfig::default();
        config.apply_overrides(
            Some("http://other/users".into()),
            Some(String::new()),
            None,
        );
        assert_eq!(config.directory.endpoint, "http://other/users");
        assert_eq!(config.reports.endpoint, DEFAULT_REPORTS_URL);
        assert_eq!(config.server.database_url, DEFAULT_DATABASE_URL);
    }
}
