//! Process configuration read from the environment.

use std::{path::PathBuf, str::FromStr, time::Duration};

use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

/// Database used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://buildbook.db?mode=rwc";
/// Pool size used when `DATABASE_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
/// Storage timeout used when `STORAGE_TIMEOUT_MS` is unset.
pub const DEFAULT_STORAGE_TIMEOUT_MS: u64 = 5000;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// sea-orm connection string.
    pub database_url: String,
    /// JSON item catalog file.
    pub catalog_path: PathBuf,
    /// Upper bound of the connection pool.
    pub database_max_connections: u32,
    /// Bound applied to every storage operation.
    pub storage_timeout: Duration,
    /// Minimum level emitted by the logger.
    pub log_level: Level,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| ConfigError::MissingEnvVar("CATALOG_PATH".to_string()))?;

        let database_max_connections: u32 = parse_var(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(invalid("DATABASE_MAX_CONNECTIONS", "must be at least 1"));
        }

        let storage_timeout_ms: u64 =
            parse_var(&lookup, "STORAGE_TIMEOUT_MS", DEFAULT_STORAGE_TIMEOUT_MS)?;
        if storage_timeout_ms == 0 {
            return Err(invalid("STORAGE_TIMEOUT_MS", "must be at least 1"));
        }

        let log_level = parse_var(&lookup, "LOG_LEVEL", Level::INFO)?;

        Ok(Self {
            database_url,
            catalog_path,
            database_max_connections,
            storage_timeout: Duration::from_millis(storage_timeout_ms),
            log_level,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(var, &e.to_string())),
        None => Ok(default),
    }
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
