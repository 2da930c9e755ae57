//! Configuration loading for TheraNova.
//! Reads theranova.toml from the current directory or the path in the
//! THERANOVA_CONFIG env var, then applies THERANOVA_* env overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_CONFIG_PATH: &str = "THERANOVA_CONFIG";
pub const ENV_BIND: &str = "THERANOVA_BIND";
pub const ENV_SCORING_URL: &str = "THERANOVA_SCORING_URL";
pub const ENV_SCORING_TIMEOUT: &str = "THERANOVA_SCORING_TIMEOUT_SECS";
pub const ENV_DB_PATH: &str = "THERANOVA_DB_PATH";

const DEFAULT_CONFIG_FILE: &str = "theranova.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> String { "0.0.0.0:8080".to_string() }

/// Remote scorer settings. `base_url` has no default: deployments have
/// disagreed on the host name, so it must be set explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_db_path() }
    }
}

fn default_db_path() -> String { "theranova.db".to_string() }


impl Config {
    /// Load configuration from theranova.toml plus environment overrides.
    ///
    /// A missing default file is fine (env vars may carry everything); a
    /// missing file named by THERANOVA_CONFIG is an error.
    pub fn load() -> anyhow::Result<Self> {
        let (path, explicit) = match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) => (path, true),
            Err(_) => (DEFAULT_CONFIG_FILE.to_string(), false),
        };

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml_str(&content)?
        } else if explicit {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy theranova.example.toml to theranova.toml and edit it.",
                path
            );
        } else {
            Config::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply THERANOVA_* overrides using `lookup` to read variables.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(bind) = lookup(ENV_BIND) {
            self.server.bind = bind;
        }
        if let Some(url) = lookup(ENV_SCORING_URL) {
            self.scoring.base_url = url;
        }
        if let Some(secs) = lookup(ENV_SCORING_TIMEOUT) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("{} must be a whole number of seconds: {}", ENV_SCORING_TIMEOUT, e))?;
            self.scoring.timeout_secs = Some(secs);
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.database.path = path;
        }
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = self.scoring.base_url.trim();
        if url.is_empty() {
            anyhow::bail!(
                "scoring.base_url is required (set it in theranova.toml or via {})",
                ENV_SCORING_URL
            );
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("scoring.base_url must be an http(s) URL, got '{}'", url);
        }
        if self.scoring.timeout_secs == Some(0) {
            anyhow::bail!("scoring.timeout_secs must be greater than zero when set");
        }
        if self.database.path.trim().is_empty() {
            anyhow::bail!("database.path must not be empty");
        }
        Ok(())
    }

    pub fn scoring_timeout(&self) -> Option<Duration> {
        self.scoring.timeout_secs.map(Duration::from_secs)
    }
}
