// Service configuration read from the environment.
//
// Variables
// - APP_ADDR: socket address to bind, defaults to 0.0.0.0:8080.
// - TIMESHEET_SEED_FILE: optional JSON file loaded into the in memory stores at startup.
// - RUST_LOG: log filter, read by tracing-subscriber directly.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("APP_ADDR `{0}` is not a valid socket address")]
    InvalidAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("APP_ADDR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;
        let seed_file = lookup("TIMESHEET_SEED_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { addr, seed_file })
    }
}
