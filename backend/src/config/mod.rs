//! Application configuration management

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::services::MAX_CHANNEL_CAPACITY;
use crate::services::logging::LogFormat;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Optional JSON file used to populate the store at startup
    pub seed_path: Option<PathBuf>,

    /// Buffered events per subscriber before it starts missing updates
    pub event_channel_capacity: usize,

    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let event_channel_capacity: usize = lookup("EVENT_CHANNEL_CAPACITY")
            .unwrap_or_else(|| "256".to_string())
            .parse()
            .context("Invalid EVENT_CHANNEL_CAPACITY")?;
        if event_channel_capacity == 0 || event_channel_capacity > MAX_CHANNEL_CAPACITY {
            bail!(
                "EVENT_CHANNEL_CAPACITY must be between 1 and {MAX_CHANNEL_CAPACITY}, got {event_channel_capacity}"
            );
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("PORT")
                .unwrap_or_else(|| "4000".to_string())
                .parse()
                .context("Invalid PORT")?,

            seed_path: lookup("SEED_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            event_channel_capacity,

            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::from_env_value(&v))
                .unwrap_or_default(),
        })
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
        assert_eq!(config.seed_path, None);
        assert_eq!(config.event_channel_capacity, 256);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SEED_PATH", "./data/seed.json"),
            ("EVENT_CHANNEL_CAPACITY", "16"),
            ("LOG_FORMAT", "pretty"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.seed_path, Some(PathBuf::from("./data/seed.json")));
        assert_eq!(config.event_channel_capacity, 16);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid PORT");
    }

    #[test]
    fn test_invalid_capacity_is_an_error() {
        let err = config_from(&[("EVENT_CHANNEL_CAPACITY", "abc")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid EVENT_CHANNEL_CAPACITY");
    }

    #[test]
    fn test_out_of_range_capacity_is_an_error() {
        let zero = config_from(&[("EVENT_CHANNEL_CAPACITY", "0")]).unwrap_err();
        assert!(zero.to_string().starts_with("EVENT_CHANNEL_CAPACITY must be between 1"));

        let huge = usize::MAX.to_string();
        let err = config_from(&[("EVENT_CHANNEL_CAPACITY", huge.as_str())]).unwrap_err();
        assert!(err.to_string().ends_with(&format!("got {huge}")));
    }

    #[test]
    fn test_largest_capacity_is_accepted() {
        let max = MAX_CHANNEL_CAPACITY.to_string();
        let config = config_from(&[("EVENT_CHANNEL_CAPACITY", max.as_str())]).unwrap();
        assert_eq!(config.event_channel_capacity, MAX_CHANNEL_CAPACITY);
    }
}
