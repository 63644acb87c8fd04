//! Shared fixture: a temp SQLite file with the lookup schema and insert helpers.

#![allow(dead_code)]

use orb_api::{create_schema, AppConfig, AppState, ConnectionProvider};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestStore {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestStore {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("orb.db");
        let store = TestStore { _dir: dir, path };
        let mut conn = store.writer().await;
        create_schema(&mut conn).await.expect("create schema");
        conn.close().await.expect("close");
        store
    }

    async fn writer(&self) -> SqliteConnection {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .connect()
            .await
            .expect("open writable")
    }

    pub fn config(&self) -> AppConfig {
        AppConfig::with_datastore(&self.path)
    }

    pub fn provider(&self) -> ConnectionProvider {
        ConnectionProvider::for_environment(&self.config(), "DEV").expect("provider")
    }

    pub fn state(&self, expose_credentials: bool) -> AppState {
        let mut config = self.config();
        config.expose_credentials = expose_credentials;
        AppState::from_config(&config).expect("state")
    }

    pub async fn add_state(&self, id: i64, name: &str) {
        let mut conn = self.writer().await;
        sqlx::query("INSERT INTO State (StateId, StateName) VALUES (?1, ?2)")
            .bind(id)
            .bind(name)
            .execute(&mut conn)
            .await
            .expect("insert state");
    }

    pub async fn add_county(&self, id: i64, state_id: i64, name: &str) {
        let mut conn = self.writer().await;
        sqlx::query("INSERT INTO County (CountyId, StateId, CountyName) VALUES (?1, ?2, ?3)")
            .bind(id)
            .bind(state_id)
            .bind(name)
            .execute(&mut conn)
            .await
            .expect("insert county");
    }

    pub async fn add_locality(&self, id: i64, state_id: i64, county_id: i64, name: &str) {
        let mut conn = self.writer().await;
        sqlx::query(
            "INSERT INTO Locality (LocalityId, StateId, CountyId, LocalityName) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(id)
        .bind(state_id)
        .bind(county_id)
        .bind(name)
        .execute(&mut conn)
        .await
        .expect("insert locality");
    }

    pub async fn add_index(&self, id: i64, state_id: i64, county_id: i64, name: &str, password: &str) {
        let mut conn = self.writer().await;
        sqlx::query(
            r#"INSERT INTO OrbIndex
               (OrbIndexId, StateId, CountyId, LocalityId, OrbIndexTypeId, IndexName, Url, Username, Password)
               VALUES (?1, ?2, ?3, NULL, 1, ?4, ?5, 'clerk', ?6)"#,
        )
        .bind(id)
        .bind(state_id)
        .bind(county_id)
        .bind(name)
        .bind(format!("https://records.example.org/{}", id))
        .bind(password)
        .execute(&mut conn)
        .await
        .expect("insert index");
    }
}
