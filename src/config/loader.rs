//! Load config from process environment (after `.env`, if the caller loaded one).

use crate::config::types::{AppConfig, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_PATH, DEFAULT_ENVIRONMENT};
use crate::error::ConfigError;
use std::net::SocketAddr;

impl AppConfig {
    /// Reads `ORB_ENVIRONMENT`, `ORB_DATABASE_PATH`, `ORB_BIND_ADDR`, `ORB_EXPOSE_CREDENTIALS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path =
            lookup("ORB_DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.into());
        let mut config = AppConfig::with_datastore(database_path);
        config.environment = lookup("ORB_ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.into());
        if config.datastore(&config.environment).is_none() {
            return Err(ConfigError::UnknownEnvironment(config.environment));
        }

        let bind = lookup("ORB_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue { key: "ORB_BIND_ADDR", value: bind.clone() })?;

        if let Some(v) = lookup("ORB_EXPOSE_CREDENTIALS") {
            config.expose_credentials = parse_bool("ORB_EXPOSE_CREDENTIALS", &v)?;
        }
        tracing::debug!(environment = %config.environment, bind = %config.bind_addr, "config loaded");
        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: value.to_string() }),
    }
}
