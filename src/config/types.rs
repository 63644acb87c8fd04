//! Runtime configuration: environment key to datastore parameters, plus server settings.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment key used when `ORB_ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "DEV";
pub const DEFAULT_DATABASE_PATH: &str = "ORB_DATABASE.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Connection parameters for one file-backed datastore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatastoreConfig {
    pub path: PathBuf,
    pub read_only: bool,
}

impl DatastoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            read_only: true,
        }
    }
}

/// Built once at startup; shared read-only afterwards.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Active environment; must be a key of `environments`.
    pub environment: String,
    pub environments: HashMap<String, DatastoreConfig>,
    pub bind_addr: SocketAddr,
    /// Return index-record passwords in API responses.
    pub expose_credentials: bool,
}

impl AppConfig {
    /// Config with a single `DEV` environment pointing at `path`.
    pub fn with_datastore(path: impl Into<PathBuf>) -> Self {
        let mut environments = HashMap::new();
        environments.insert(DEFAULT_ENVIRONMENT.to_string(), DatastoreConfig::new(path));
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            environments,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            expose_credentials: false,
        }
    }

    pub fn datastore(&self, key: &str) -> Option<&DatastoreConfig> {
        self.environments.get(key)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_datastore(DEFAULT_DATABASE_PATH)
    }
}
