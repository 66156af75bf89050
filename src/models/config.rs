//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{StationCatalogue, StationSpec};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the report index lives
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Output and scratch locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Station catalogue
    #[serde(default = "defaults::stations")]
    pub stations: Vec<StationSpec>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Build the station catalogue described by this configuration.
    pub fn catalogue(&self) -> Result<StationCatalogue> {
        StationCatalogue::new(self.stations.clone())
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        url::Url::parse(&self.source.index_url).map_err(|e| {
            AppError::validation(format!(
                "source.index_url '{}' is invalid: {e}",
                self.source.index_url
            ))
        })?;
        url::Url::parse(&self.source.base_url).map_err(|e| {
            AppError::validation(format!(
                "source.base_url '{}' is invalid: {e}",
                self.source.base_url
            ))
        })?;
        if self.source.link_hint.trim().is_empty() {
            return Err(AppError::validation("source.link_hint is empty"));
        }
        if self.paths.output_file.as_os_str().is_empty() {
            return Err(AppError::validation("paths.output_file is empty"));
        }
        if self.paths.scratch_dir.as_os_str().is_empty() {
            return Err(AppError::validation("paths.scratch_dir is empty"));
        }
        self.catalogue()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            http: HttpConfig::default(),
            paths: PathsConfig::default(),
            stations: defaults::stations(),
        }
    }
}

/// Report index location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Page listing the daily report documents
    #[serde(default = "defaults::index_url")]
    pub index_url: String,

    /// Base for resolving relative document links
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Case-insensitive substring an href must contain
    #[serde(default = "defaults::link_hint")]
    pub link_hint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            index_url: defaults::index_url(),
            base_url: defaults::base_url(),
            link_hint: defaults::link_hint(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON array written at the end of each run
    #[serde(default = "defaults::output_file")]
    pub output_file: PathBuf,

    /// Downloaded documents live here for the duration of a run
    #[serde(default = "defaults::scratch_dir")]
    pub scratch_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_file: defaults::output_file(),
            scratch_dir: defaults::scratch_dir(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    use crate::models::StationSpec;
    use crate::models::catalogue::default_stations;

    pub fn index_url() -> String {
        "http://pakirsa.gov.pk/DailyData.aspx".into()
    }
    pub fn base_url() -> String {
        "http://pakirsa.gov.pk".into()
    }
    pub fn link_hint() -> String {
        "pdf".into()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn output_file() -> PathBuf {
        PathBuf::from("public/data/irsa_river_data.json")
    }
    pub fn scratch_dir() -> PathBuf {
        PathBuf::from("temp_pdfs")
    }

    pub fn stations() -> Vec<StationSpec> {
        default_stations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.source.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_catalogue() {
        let mut config = Config::default();
        config.stations.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [http]
            timeout_secs = 5

            [paths]
            output_file = "out/data.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.user_agent, defaults::user_agent());
        assert_eq!(config.paths.output_file, PathBuf::from("out/data.json"));
        assert_eq!(config.paths.scratch_dir, PathBuf::from("temp_pdfs"));
        assert_eq!(config.stations.len(), 11);
    }

    #[test]
    fn toml_station_override() {
        let config: Config = toml::from_str(
            r#"
            [[stations]]
            name = "INDUS @ TARBELA"
            metrics = ["LEVEL"]

            [[stations]]
            name = "GUDDU"
            metrics = ["U/S DISCHARGE"]
            "#,
        )
        .unwrap();

        let catalogue = config.catalogue().unwrap();
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.stations()[1].name, "GUDDU");
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.source.link_hint, "pdf");
    }
}
