//! Datastore access: environment-resolved SQLite connection parameters and the lookup-table DDL.

use crate::config::AppConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};

/// Builds connection parameters for one environment; no I/O until [`open`](Self::open).
#[derive(Clone, Debug)]
pub struct ConnectionProvider {
    environment: String,
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl ConnectionProvider {
    pub fn for_environment(config: &AppConfig, key: &str) -> Result<Self, ConfigError> {
        let datastore = config
            .datastore(key)
            .ok_or_else(|| ConfigError::UnknownEnvironment(key.to_string()))?;
        // A missing file is an open error, never an empty database.
        let options = SqliteConnectOptions::new()
            .filename(&datastore.path)
            .create_if_missing(false)
            .read_only(datastore.read_only);
        Ok(Self {
            environment: key.to_string(),
            path: datastore.path.clone(),
            options,
        })
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection. Callers close it when done; there is no pool.
    pub async fn open(&self) -> Result<SqliteConnection, AppError> {
        tracing::debug!(environment = %self.environment, path = %self.path.display(), "open datastore");
        Ok(self.options.connect().await?)
    }
}

/// Fail fast at startup when the configured datastore file does not exist.
pub fn ensure_datastore_exists(provider: &ConnectionProvider) -> Result<(), ConfigError> {
    if provider.path().is_file() {
        Ok(())
    } else {
        Err(ConfigError::MissingDatastore(provider.path().display().to_string()))
    }
}

const LOOKUP_TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS State (
        StateId INTEGER PRIMARY KEY,
        StateName TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS County (
        CountyId INTEGER PRIMARY KEY,
        StateId INTEGER NOT NULL REFERENCES State (StateId),
        CountyName TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Locality (
        LocalityId INTEGER PRIMARY KEY,
        StateId INTEGER NOT NULL REFERENCES State (StateId),
        CountyId INTEGER NOT NULL REFERENCES County (CountyId),
        LocalityName TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS OrbIndex (
        OrbIndexId INTEGER PRIMARY KEY,
        StateId INTEGER NOT NULL REFERENCES State (StateId),
        CountyId INTEGER NOT NULL REFERENCES County (CountyId),
        LocalityId INTEGER REFERENCES Locality (LocalityId),
        OrbIndexTypeId INTEGER,
        IndexName TEXT NOT NULL,
        Url TEXT,
        Username TEXT,
        Password TEXT
    )
    "#,
];

/// Create the State, County, Locality and OrbIndex tables if absent. The server never calls this.
pub async fn create_schema(conn: &mut SqliteConnection) -> Result<(), AppError> {
    for ddl in LOOKUP_TABLES {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_environment_is_config_error() {
        let config = AppConfig::with_datastore("orb.db");
        let err = ConnectionProvider::for_environment(&config, "QA").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment(ref k) if k == "QA"));
    }

    #[test]
    fn provider_keeps_environment_and_path() {
        let config = AppConfig::with_datastore("orb.db");
        let provider = ConnectionProvider::for_environment(&config, "DEV").unwrap();
        assert_eq!(provider.environment(), "DEV");
        assert_eq!(provider.path(), Path::new("orb.db"));
    }

    #[test]
    fn missing_file_fails_existence_check() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_datastore(dir.path().join("absent.db"));
        let provider = ConnectionProvider::for_environment(&config, "DEV").unwrap();
        assert!(matches!(
            ensure_datastore_exists(&provider),
            Err(ConfigError::MissingDatastore(_))
        ));
    }

    #[tokio::test]
    async fn open_missing_file_is_db_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_datastore(dir.path().join("absent.db"));
        let provider = ConnectionProvider::for_environment(&config, "DEV").unwrap();
        assert!(matches!(provider.open().await, Err(AppError::Db(_))));
        assert!(!dir.path().join("absent.db").exists());
    }
}
