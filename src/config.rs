// src/config.rs

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DB_PATH: &str = "redibo.sqlite3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the booking backend.
    pub api_url: String,
    pub bind_addr: SocketAddr,
    /// SQLite file holding the local credential store.
    pub db_path: String,
    pub request_timeout: Duration,
    pub max_workers: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = get("REDIBO_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            var: "REDIBO_BIND",
            expected: "socket address",
            value: bind.clone(),
        })?;

        let timeout_secs = match get("REDIBO_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "REDIBO_TIMEOUT_SECS",
                expected: "number of seconds",
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let max_workers = match get("REDIBO_WORKERS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    var: "REDIBO_WORKERS",
                    expected: "positive worker count",
                    value: raw,
                })?,
            None => 8,
        };

        Ok(Self {
            api_url: get("REDIBO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            bind_addr,
            db_path: get("REDIBO_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
            max_workers,
        })
    }
}
