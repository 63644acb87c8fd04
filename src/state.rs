//! Shared application state for all routes. Immutable once built.

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::store::ConnectionProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<ConnectionProvider>,
    /// When false, index-record passwords are stripped from responses.
    pub expose_credentials: bool,
}

impl AppState {
    /// Resolve the active environment to its datastore.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let provider = ConnectionProvider::for_environment(config, &config.environment)?;
        Ok(Self {
            provider: Arc::new(provider),
            expose_credentials: config.expose_credentials,
        })
    }
}
