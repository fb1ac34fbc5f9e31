//! Configuration for query defaults and caching, loaded from TOML.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Defaults applied to every query started through [`crate::QueryExt::query_with`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QueryDefaults {
    /// Read without taking row locks
    #[serde(default = "default_no_lock")]
    pub no_lock: bool,
    /// Records per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Ask the backend for the total record count
    #[serde(default)]
    pub return_total_record_count: bool,
}

fn default_no_lock() -> bool {
    true
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            no_lock: default_no_lock(),
            page_size: None,
            return_total_record_count: false,
        }
    }
}

/// Cache settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Time-to-live of a cached result in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_ttl_secs() -> u64 {
    3600
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    /// Absolute expiry for an entry stored at `now`.
    pub fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let ttl = i64::try_from(self.ttl_secs).unwrap_or(i64::MAX);
        Duration::try_seconds(ttl)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Main configuration struct, usually read from `fluent-query.toml`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FluentQueryConfig {
    #[serde(default)]
    pub query: QueryDefaults,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl FluentQueryConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(String),
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}
