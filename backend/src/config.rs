use std::collections::HashSet;
use std::env;

use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub api_keys: HashSet<String>,
    pub reconcile_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let port = parse_or_default("PORT", 8000)?;
        let reconcile_interval_secs = parse_or_default("RECONCILE_INTERVAL_SECS", 3600)?;

        let api_keys: HashSet<String> = env::var("API_KEYS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        if api_keys.is_empty() {
            warn!("API_KEYS not set - API key verification will be disabled");
        } else {
            info!("loaded {} API key(s)", api_keys.len());
        }

        Ok(Self {
            database_url,
            port,
            api_keys,
            reconcile_interval_secs,
        })
    }
}

fn parse_or_default<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        Err(_) => Ok(default),
    }
}
