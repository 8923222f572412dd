//! Configuration loading from TOML files

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use popstat_extract::ColumnLayout;
use serde::Deserialize;

/// Pinned revision of the UN population list the column layout was written against.
pub const DEFAULT_SOURCE_URL: &str = "https://en.wikipedia.org/w/index.php?title=List_of_countries_by_population_(United_Nations)&oldid=1215058959";

pub const DEFAULT_DATABASE: &str = "population.duckdb";

/// Global configuration for popstat
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub source: SourceConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// DuckDB file, or ":memory:"
    #[serde(deserialize_with = "deserialize_env_var")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// http(s) URL or local file holding the population table
    #[serde(deserialize_with = "deserialize_env_var")]
    pub url: String,
    #[serde(flatten)]
    pub layout: ColumnLayout,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: std::env::var("DATA_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string()),
            layout: ColumnLayout::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        let fetch = popstat_core::FetchConfig::default();
        Self {
            timeout_secs: fetch.timeout.as_secs(),
            user_agent: fetch.user_agent,
        }
    }
}

impl HttpConfig {
    pub fn fetch_config(&self) -> popstat_core::FetchConfig {
        popstat_core::FetchConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// Deserialize a string that may be an environment variable reference like ${VAR}
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    expand_env_var(&s).ok_or_else(|| {
        serde::de::Error::custom(format!("environment variable in {s:?} is not set"))
    })
}

/// Expand ${VAR} to environment variable value
fn expand_env_var(s: &str) -> Option<String> {
    if let Some(var_name) = s.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        std::env::var(var_name).ok()
    } else {
        Some(s.to_string())
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./popstat.toml (current directory)
    /// 2. ~/.config/popstat/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("popstat.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "popstat") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
