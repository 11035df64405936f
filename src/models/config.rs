//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and extraction behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Ingestion scheduler settings
    #[serde(default)]
    pub scheduler: SchedulerConfig,
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

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.source_url.trim().is_empty() {
            return Err(AppError::validation("scraper.source_url is empty"));
        }
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_ms == 0 {
            return Err(AppError::validation("scraper.timeout_ms must be > 0"));
        }
        if self.scheduler.interval_ms == 0 {
            return Err(AppError::validation("scheduler.interval_ms must be > 0"));
        }
        if self.scheduler.limit == 0 {
            return Err(AppError::validation("scheduler.limit must be > 0"));
        }
        if self.scheduler.concurrency == 0 {
            return Err(AppError::validation("scheduler.concurrency must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client and extraction behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Listing page URL for the news source
    #[serde(default = "defaults::source_url")]
    pub source_url: String,

    /// Source name attached to every stub
    #[serde(default = "defaults::source_name")]
    pub source_name: String,

    /// Category used when a page offers none
    #[serde(default = "defaults::default_category")]
    pub default_category: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Accept header for HTTP requests
    #[serde(default = "defaults::accept")]
    pub accept: String,

    /// Accept-Language header for HTTP requests
    #[serde(default = "defaults::accept_language")]
    pub accept_language: String,

    /// Request timeout in milliseconds
    #[serde(default = "defaults::timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            source_url: defaults::source_url(),
            source_name: defaults::source_name(),
            default_category: defaults::default_category(),
            user_agent: defaults::user_agent(),
            accept: defaults::accept(),
            accept_language: defaults::accept_language(),
            timeout_ms: defaults::timeout_ms(),
        }
    }
}

/// Ingestion scheduler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Milliseconds between scheduled ingestion runs
    #[serde(default = "defaults::interval_ms")]
    pub interval_ms: u64,

    /// Maximum listing stubs enriched per run
    #[serde(default = "defaults::limit")]
    pub limit: usize,

    /// Maximum concurrent detail fetches
    #[serde(default = "defaults::concurrency")]
    pub concurrency: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_ms: defaults::interval_ms(),
            limit: defaults::limit(),
            concurrency: defaults::concurrency(),
        }
    }
}

mod defaults {
    // Scraper defaults
    pub fn source_url() -> String {
        "https://n1info.rs/vesti/".into()
    }
    pub fn source_name() -> String {
        "N1 Info RS".into()
    }
    pub fn default_category() -> String {
        "Vesti".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; WordwatchBot/1.0; +https://example.com/bot)".into()
    }
    pub fn accept() -> String {
        "text/html,application/xhtml+xml".into()
    }
    pub fn accept_language() -> String {
        "en-US,en;q=0.9,sr;q=0.8".into()
    }
    pub fn timeout_ms() -> u64 {
        15_000
    }

    // Scheduler defaults
    pub fn interval_ms() -> u64 {
        300_000
    }
    pub fn limit() -> usize {
        20
    }
    pub fn concurrency() -> usize {
        5
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_concurrency() {
        let mut config = Config::default();
        config.scheduler.concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let mut config = Config::default();
        config.scheduler.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_source_url() {
        let mut config = Config::default();
        config.scraper.source_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_partial_toml_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[scheduler]\ninterval_ms = 60000\nlimit = 5\n\n[scraper]\ntimeout_ms = 5000"
        )
        .expect("write config");

        let config = Config::load(file.path()).expect("load config");
        assert_eq!(config.scheduler.interval_ms, 60_000);
        assert_eq!(config.scheduler.limit, 5);
        assert_eq!(config.scheduler.concurrency, 5);
        assert_eq!(config.scraper.timeout_ms, 5_000);
        assert_eq!(config.scraper.source_name, "N1 Info RS");
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/config.toml");
        assert_eq!(config.scheduler.interval_ms, 300_000);
    }
}
